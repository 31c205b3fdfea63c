// ============================================================================
// Chore Core - Catalog Service
// File: crates/chore-core/src/services/catalog_service.rs
// ============================================================================
//! Management of a group's task templates

use std::sync::Arc;

use chore_shared::EntityId;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::CatalogItem;
use crate::error::DomainError;
use crate::repositories::CatalogRepository;

pub struct CatalogService<C: CatalogRepository> {
    catalog_repo: Arc<C>,
}

impl<C: CatalogRepository> CatalogService<C> {
    pub fn new(catalog_repo: Arc<C>) -> Self {
        Self { catalog_repo }
    }

    /// Add a task template to a group's catalog
    pub async fn create_item(&self, input: CreateCatalogItemInput) -> Result<CatalogItem, DomainError> {
        let item = CatalogItem::new(input.group_id, input.name, input.default_value, input.icon)?;
        let created = self.catalog_repo.create(&item).await?;

        info!("Catalog item {} created in group {}", created.id, created.group_id);
        Ok(created)
    }

    /// Update name, default value and/or icon. Tasks already recorded keep
    /// the value they were created with.
    pub async fn update_item(&self, input: UpdateCatalogItemInput) -> Result<CatalogItem, DomainError> {
        let mut item = self
            .catalog_repo
            .find_by_id(&input.catalog_id)
            .await?
            .ok_or_else(|| {
                warn!("Update failed: catalog item not found: {}", input.catalog_id);
                DomainError::CatalogItemNotFound(input.catalog_id)
            })?;

        if let Some(name) = input.name {
            item.name = name.trim().to_string();
        }
        if let Some(default_value) = input.default_value {
            item.default_value = default_value;
        }
        if let Some(icon) = input.icon {
            item.icon = icon.trim().to_string();
        }
        item.validate()?;

        let updated = self.catalog_repo.update(&item).await?;

        info!("Catalog item {} updated", updated.id);
        Ok(updated)
    }
}

#[derive(Debug, Clone)]
pub struct CreateCatalogItemInput {
    pub group_id: EntityId,
    pub name: String,
    pub default_value: f64,
    pub icon: String,
}

/// Fields left as `None` are kept unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateCatalogItemInput {
    pub catalog_id: EntityId,
    pub name: Option<String>,
    pub default_value: Option<f64>,
    pub icon: Option<String>,
}
