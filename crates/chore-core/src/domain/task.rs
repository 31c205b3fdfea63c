// ============================================================================
// Chore Core - Task Entity
// File: crates/chore-core/src/domain/task.rs
// Description: Immutable record of one point-valued chore
// ============================================================================

use chrono::{DateTime, Utc};
use chore_shared::EntityId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Task entity.
///
/// `value` is a snapshot taken when the task is recorded; later changes to the
/// catalog item it came from never reach it. Beneficiaries are kept exactly as
/// given, so a repeated id is charged once per occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TaskRecord")]
pub struct Task {
    id: EntityId,
    value: f64,
    doer_id: EntityId,
    beneficiary_ids: Vec<EntityId>,
    group_id: EntityId,
    catalog_id: Option<EntityId>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Create a task, rejecting a negative (or non-finite) value and an empty
    /// beneficiary list. `created_at` defaults to now.
    pub fn new(
        id: EntityId,
        value: f64,
        doer_id: EntityId,
        beneficiary_ids: Vec<EntityId>,
        group_id: EntityId,
        catalog_id: Option<EntityId>,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::InvalidTaskValue(value));
        }
        if beneficiary_ids.is_empty() {
            return Err(DomainError::NoBeneficiaries);
        }

        Ok(Self {
            id,
            value,
            doer_id,
            beneficiary_ids,
            group_id,
            catalog_id,
            created_at: created_at.unwrap_or_else(Utc::now),
        })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn doer_id(&self) -> EntityId {
        self.doer_id
    }

    pub fn beneficiary_ids(&self) -> &[EntityId] {
        &self.beneficiary_ids
    }

    pub fn group_id(&self) -> EntityId {
        self.group_id
    }

    pub fn catalog_id(&self) -> Option<EntityId> {
        self.catalog_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of beneficiaries who share the cost
    pub fn beneficiary_count(&self) -> usize {
        self.beneficiary_ids.len()
    }

    /// Share charged to each beneficiary. Never zero-divides: construction
    /// guarantees at least one beneficiary.
    pub fn cost_per_beneficiary(&self) -> f64 {
        self.value / self.beneficiary_count() as f64
    }
}

/// Wire shape of a task; deserialisation re-runs construction checks.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: EntityId,
    value: f64,
    doer_id: EntityId,
    beneficiary_ids: Vec<EntityId>,
    group_id: EntityId,
    #[serde(default)]
    catalog_id: Option<EntityId>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = DomainError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        Task::new(
            record.id,
            record.value,
            record.doer_id,
            record.beneficiary_ids,
            record.group_id,
            record.catalog_id,
            record.created_at,
        )
    }
}
