// ============================================================================
// Chore Core - Catalog Item Entity
// File: crates/chore-core/src/domain/catalog_item.rs
// Description: Reusable task template of a group
// ============================================================================

use chore_shared::{new_id, EntityId};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Catalog item entity.
///
/// `default_value` is copied into a task when the task is recorded; editing it
/// afterwards only affects tasks recorded later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: EntityId,
    pub group_id: EntityId,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(
        range(min = 0.0, message = "Default value must be non-negative"),
        custom(function = "ensure_finite")
    )]
    pub default_value: f64,

    #[validate(length(min = 1, max = 32, message = "Icon must be between 1 and 32 characters"))]
    pub icon: String,
}

impl CatalogItem {
    pub fn new(
        group_id: EntityId,
        name: String,
        default_value: f64,
        icon: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            id: new_id(),
            group_id,
            name: name.trim().to_string(),
            default_value,
            icon: icon.trim().to_string(),
        };

        item.validate()?;
        Ok(item)
    }
}

// NaN passes the range check and is written as null on disk
fn ensure_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite").with_message("Default value must be a finite number".into()))
    }
}
