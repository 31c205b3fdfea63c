// ============================================================================
// Chore Core - Task Service
// File: crates/chore-core/src/services/task_service.rs
// ============================================================================
//! Recording and removing tasks of a group

use std::collections::HashSet;
use std::sync::Arc;

use chore_shared::{new_id, EntityId};
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::Task;
use crate::error::DomainError;
use crate::repositories::{CatalogRepository, TaskRepository, UserRepository};

/// Task service: checks membership, snapshots the value, persists
pub struct TaskService<U: UserRepository, T: TaskRepository, C: CatalogRepository> {
    user_repo: Arc<U>,
    task_repo: Arc<T>,
    catalog_repo: Arc<C>,
}

impl<U: UserRepository, T: TaskRepository, C: CatalogRepository> TaskService<U, T, C> {
    pub fn new(user_repo: Arc<U>, task_repo: Arc<T>, catalog_repo: Arc<C>) -> Self {
        Self {
            user_repo,
            task_repo,
            catalog_repo,
        }
    }

    /// Record a task performed in a group
    pub async fn create_task(&self, input: CreateTaskInput) -> Result<TaskCreated, DomainError> {
        info!(
            "Recording task in group {} by {} for {} beneficiaries",
            input.group_id,
            input.doer_id,
            input.beneficiary_ids.len()
        );

        // 1. Doer and beneficiaries must belong to the group
        let members: HashSet<EntityId> = self
            .user_repo
            .find_by_group_id(&input.group_id)
            .await?
            .into_iter()
            .map(|user| user.id)
            .collect();

        if !members.contains(&input.doer_id) {
            warn!("Task rejected: doer {} is not in group {}", input.doer_id, input.group_id);
            return Err(DomainError::UserNotFound(input.doer_id));
        }

        if let Some(outsider) = input.beneficiary_ids.iter().find(|id| !members.contains(*id)) {
            warn!("Task rejected: beneficiary {} is not in group {}", outsider, input.group_id);
            return Err(DomainError::UserNotFound(*outsider));
        }

        // 2. Freeze the value
        let value = self.resolve_value(&input).await?;

        // 3. Structural validation
        let task = Task::new(
            new_id(),
            value,
            input.doer_id,
            input.beneficiary_ids,
            input.group_id,
            input.catalog_id,
            None,
        )?;

        // 4. Persist
        let saved = self.task_repo.save(&task).await?;

        info!("Task {} recorded with value {}", saved.id(), saved.value());
        Ok(TaskCreated::from(&saved))
    }

    /// Remove a task from a group
    pub async fn delete_task(&self, group_id: &EntityId, task_id: &EntityId) -> Result<(), DomainError> {
        let tasks = self.task_repo.find_by_group_id(group_id).await?;
        if !tasks.iter().any(|task| task.id() == *task_id) {
            warn!("Delete failed: task {} not found in group {}", task_id, group_id);
            return Err(DomainError::TaskNotFound(*task_id));
        }

        self.task_repo.delete(task_id).await?;

        info!("Task {} deleted from group {}", task_id, group_id);
        Ok(())
    }

    async fn resolve_value(&self, input: &CreateTaskInput) -> Result<f64, DomainError> {
        match (input.value, input.catalog_id) {
            (Some(value), _) => Ok(value),
            (None, Some(catalog_id)) => {
                let item = self
                    .catalog_repo
                    .find_by_id(&catalog_id)
                    .await?
                    .filter(|item| item.group_id == input.group_id)
                    .ok_or(DomainError::CatalogItemNotFound(catalog_id))?;
                Ok(item.default_value)
            }
            (None, None) => Err(DomainError::ValidationError(
                "Task value or catalog reference is required".to_string(),
            )),
        }
    }
}

/// Input for recording a task. Without an explicit `value` the catalog
/// item's default value is used.
#[derive(Debug, Clone)]
pub struct CreateTaskInput {
    pub group_id: EntityId,
    pub doer_id: EntityId,
    pub catalog_id: Option<EntityId>,
    pub value: Option<f64>,
    pub beneficiary_ids: Vec<EntityId>,
}

/// Result of a recorded task
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreated {
    pub id: EntityId,
    pub value: f64,
    pub doer_id: EntityId,
    pub beneficiary_ids: Vec<EntityId>,
    pub group_id: EntityId,
    pub catalog_id: Option<EntityId>,
    pub created_at: String,
}

impl From<&Task> for TaskCreated {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            value: task.value(),
            doer_id: task.doer_id(),
            beneficiary_ids: task.beneficiary_ids().to_vec(),
            group_id: task.group_id(),
            catalog_id: task.catalog_id(),
            created_at: task.created_at().to_rfc3339(),
        }
    }
}
