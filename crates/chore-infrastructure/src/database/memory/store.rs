// ============================================================================
// Chore Infrastructure - Ledger Store
// File: crates/chore-infrastructure/src/database/memory/store.rs
// ============================================================================

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chore_core::domain::{CatalogItem, Task, User};
use chore_shared::{AppError, EntityId};
use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// Everything the repositories serve, as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub users: Vec<User>,
    /// Group id to member ids, in roster order
    #[serde(default)]
    pub memberships: BTreeMap<EntityId, Vec<EntityId>>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub catalog: Vec<CatalogItem>,
}

/// Shared state of the in-memory repositories.
///
/// Tasks read back from disk go through `Task` validation, so a snapshot
/// holding a negative value or an empty beneficiary list fails to open.
pub struct LedgerStore {
    path: Option<PathBuf>,
    state: RwLock<LedgerSnapshot>,
}

impl LedgerStore {
    /// Store that lives only in memory
    pub fn new(snapshot: LedgerSnapshot) -> Self {
        Self {
            path: None,
            state: RwLock::new(snapshot),
        }
    }

    /// Load the snapshot at `path`; a missing file yields an empty ledger.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let snapshot = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No ledger snapshot at {}, starting empty", path.display());
                LedgerSnapshot::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: Some(path),
            state: RwLock::new(snapshot),
        })
    }

    /// Write the current state back to the file it was opened from
    pub async fn persist(&self) -> Result<(), AppError> {
        let Some(path) = &self.path else {
            debug!("Ledger store has no backing file, nothing to persist");
            return Ok(());
        };

        let contents = {
            let state = self.state.read().await;
            serde_json::to_string_pretty(&*state)?
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await?;

        info!("Ledger snapshot written to {}", path.display());
        Ok(())
    }

    pub async fn snapshot(&self) -> LedgerSnapshot {
        self.state.read().await.clone()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, LedgerSnapshot> {
        self.state.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, LedgerSnapshot> {
        self.state.write().await
    }
}
