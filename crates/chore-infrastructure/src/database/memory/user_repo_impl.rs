// ============================================================================
// Chore Infrastructure - In-Memory User Repository
// File: crates/chore-infrastructure/src/database/memory/user_repo_impl.rs
// ============================================================================

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chore_core::domain::User;
use chore_core::error::DomainError;
use chore_core::repositories::UserRepository;
use chore_shared::EntityId;
use tracing::debug;

use super::store::LedgerStore;

pub struct MemoryUserRepository {
    store: Arc<LedgerStore>,
}

impl MemoryUserRepository {
    pub fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<User>, DomainError> {
        let state = self.store.read().await;
        Ok(state.users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_group_id(&self, group_id: &EntityId) -> Result<Vec<User>, DomainError> {
        let state = self.store.read().await;
        let Some(member_ids) = state.memberships.get(group_id) else {
            return Ok(Vec::new());
        };

        // first occurrence wins, so roster order is kept
        let mut seen = HashSet::new();
        let members = member_ids
            .iter()
            .filter(|member_id| seen.insert(**member_id))
            .filter_map(|member_id| {
                let user = state.users.iter().find(|u| u.id == *member_id);
                if user.is_none() {
                    debug!("Group {} lists unknown member {}", group_id, member_id);
                }
                user.cloned()
            })
            .collect();

        Ok(members)
    }
}
