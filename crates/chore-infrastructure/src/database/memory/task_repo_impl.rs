// ============================================================================
// Chore Infrastructure - In-Memory Task Repository
// File: crates/chore-infrastructure/src/database/memory/task_repo_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use chore_core::domain::Task;
use chore_core::error::DomainError;
use chore_core::repositories::TaskRepository;
use chore_shared::EntityId;
use tracing::info;

use super::store::LedgerStore;

pub struct MemoryTaskRepository {
    store: Arc<LedgerStore>,
}

impl MemoryTaskRepository {
    pub fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskRepository {
    async fn find_by_group_id(&self, group_id: &EntityId) -> Result<Vec<Task>, DomainError> {
        let state = self.store.read().await;
        Ok(state
            .tasks
            .iter()
            .filter(|t| t.group_id() == *group_id)
            .cloned()
            .collect())
    }

    async fn save(&self, task: &Task) -> Result<Task, DomainError> {
        let mut state = self.store.write().await;
        if let Some(index) = state.tasks.iter().position(|t| t.id() == task.id()) {
            state.tasks[index] = task.clone();
        } else {
            state.tasks.push(task.clone());
        }

        info!("Task {} saved", task.id());
        Ok(task.clone())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), DomainError> {
        let mut state = self.store.write().await;
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id() != *id);

        if state.tasks.len() == before {
            return Err(DomainError::TaskNotFound(*id));
        }
        Ok(())
    }
}
