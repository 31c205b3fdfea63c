//! Task repository trait (port)

use async_trait::async_trait;
use chore_shared::EntityId;
#[cfg(test)]
use mockall::automock;

use crate::domain::Task;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn find_by_group_id(&self, group_id: &EntityId) -> Result<Vec<Task>, DomainError>;
    async fn save(&self, task: &Task) -> Result<Task, DomainError>;
    async fn delete(&self, id: &EntityId) -> Result<(), DomainError>;
}
