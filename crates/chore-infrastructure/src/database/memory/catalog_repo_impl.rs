// ============================================================================
// Chore Infrastructure - In-Memory Catalog Repository
// File: crates/chore-infrastructure/src/database/memory/catalog_repo_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use chore_core::domain::CatalogItem;
use chore_core::error::DomainError;
use chore_core::repositories::CatalogRepository;
use chore_shared::EntityId;

use super::store::LedgerStore;

pub struct MemoryCatalogRepository {
    store: Arc<LedgerStore>,
}

impl MemoryCatalogRepository {
    pub fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogRepository {
    async fn find_by_group_id(&self, group_id: &EntityId) -> Result<Vec<CatalogItem>, DomainError> {
        let state = self.store.read().await;
        Ok(state
            .catalog
            .iter()
            .filter(|c| c.group_id == *group_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<CatalogItem>, DomainError> {
        let state = self.store.read().await;
        Ok(state.catalog.iter().find(|c| c.id == *id).cloned())
    }

    async fn create(&self, item: &CatalogItem) -> Result<CatalogItem, DomainError> {
        let mut state = self.store.write().await;
        state.catalog.push(item.clone());
        Ok(item.clone())
    }

    async fn update(&self, item: &CatalogItem) -> Result<CatalogItem, DomainError> {
        let mut state = self.store.write().await;
        let existing = state
            .catalog
            .iter_mut()
            .find(|c| c.id == item.id)
            .ok_or(DomainError::CatalogItemNotFound(item.id))?;

        *existing = item.clone();
        Ok(item.clone())
    }
}
