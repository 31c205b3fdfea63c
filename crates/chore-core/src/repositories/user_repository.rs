//! User repository trait (port)

use async_trait::async_trait;
use chore_shared::EntityId;
#[cfg(test)]
use mockall::automock;

use crate::domain::User;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<User>, DomainError>;
    /// Every member of the group, in roster order.
    async fn find_by_group_id(&self, group_id: &EntityId) -> Result<Vec<User>, DomainError>;
}
