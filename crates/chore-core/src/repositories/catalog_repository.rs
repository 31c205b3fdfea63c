//! Catalog repository trait (port)

use async_trait::async_trait;
use chore_shared::EntityId;
#[cfg(test)]
use mockall::automock;

use crate::domain::CatalogItem;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_by_group_id(&self, group_id: &EntityId) -> Result<Vec<CatalogItem>, DomainError>;
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<CatalogItem>, DomainError>;
    async fn create(&self, item: &CatalogItem) -> Result<CatalogItem, DomainError>;
    async fn update(&self, item: &CatalogItem) -> Result<CatalogItem, DomainError>;
}
