//! Domain errors

use chore_shared::EntityId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Task value must be non-negative, received: {0}")]
    InvalidTaskValue(f64),

    #[error("Task must have at least one beneficiary")]
    NoBeneficiaries,

    #[error("User not found: {0}")]
    UserNotFound(EntityId),

    #[error("Task not found: {0}")]
    TaskNotFound(EntityId),

    #[error("Catalog item not found: {0}")]
    CatalogItemNotFound(EntityId),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
