// ============================================================================
// Chore Core - Dashboard Service
// File: crates/chore-core/src/services/dashboard_service.rs
// ============================================================================
//! Group dashboard: sorted balances, next-doer suggestion, recent history,
//! and the catalog of the group.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use chore_shared::config::LedgerSettings;
use chore_shared::constants::{
    DEFAULT_HISTORY_LIMIT, DEFAULT_UNKNOWN_USER_LABEL, DEFAULT_UNNAMED_TASK_LABEL,
};
use chore_shared::EntityId;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{CatalogItem, Task, User, UserBalance};
use crate::error::DomainError;
use crate::repositories::{CatalogRepository, TaskRepository, UserRepository};
use crate::services::balance_calculator::{is_balanced, total_balance, BalanceCalculator};

/// Display settings of the dashboard
#[derive(Debug, Clone)]
pub struct DashboardSettings {
    pub history_limit: usize,
    pub unnamed_task_label: String,
    pub unknown_user_label: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            unnamed_task_label: DEFAULT_UNNAMED_TASK_LABEL.to_string(),
            unknown_user_label: DEFAULT_UNKNOWN_USER_LABEL.to_string(),
        }
    }
}

impl From<&LedgerSettings> for DashboardSettings {
    fn from(settings: &LedgerSettings) -> Self {
        Self {
            history_limit: settings.history_limit,
            unnamed_task_label: settings.unnamed_task_label.clone(),
            unknown_user_label: settings.unknown_user_label.clone(),
        }
    }
}

pub struct DashboardService<U: UserRepository, T: TaskRepository, C: CatalogRepository> {
    user_repo: Arc<U>,
    task_repo: Arc<T>,
    catalog_repo: Arc<C>,
    calculator: BalanceCalculator,
    settings: DashboardSettings,
}

impl<U: UserRepository, T: TaskRepository, C: CatalogRepository> DashboardService<U, T, C> {
    pub fn new(
        user_repo: Arc<U>,
        task_repo: Arc<T>,
        catalog_repo: Arc<C>,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            user_repo,
            task_repo,
            catalog_repo,
            calculator: BalanceCalculator::new(),
            settings,
        }
    }

    pub async fn get_group_dashboard(&self, group_id: &EntityId) -> Result<GroupDashboard, DomainError> {
        // 1. One snapshot of the group, fetched concurrently
        let (users, tasks, catalog_items) = tokio::try_join!(
            self.user_repo.find_by_group_id(group_id),
            self.task_repo.find_by_group_id(group_id),
            self.catalog_repo.find_by_group_id(group_id),
        )?;
        debug!(
            "Dashboard for group {}: {} users, {} tasks, {} catalog items",
            group_id,
            users.len(),
            tasks.len(),
            catalog_items.len()
        );

        // 2. Balances and suggestion
        let balance_map = self.calculator.compute_balances(&users, &tasks);
        if !is_balanced(&balance_map) {
            warn!(
                "Balances of group {} sum to {} instead of zero",
                group_id,
                total_balance(&balance_map)
            );
        }
        let suggested_next_doer = self
            .calculator
            .suggest_next_doer(&users, &tasks)
            .map(SuggestedDoer::from);

        Ok(GroupDashboard {
            group_id: *group_id,
            balances: balance_views(&users, &balance_map),
            suggested_next_doer,
            history: self.history(&users, &tasks, &catalog_items),
            catalog: catalog_items.iter().map(CatalogItemSummary::from).collect(),
        })
    }

    /// Most recent tasks first, truncated to the configured limit
    fn history(&self, users: &[User], tasks: &[Task], catalog_items: &[CatalogItem]) -> Vec<TaskHistoryItem> {
        let user_names: HashMap<EntityId, &str> =
            users.iter().map(|u| (u.id, u.name.as_str())).collect();
        let catalog_names: HashMap<EntityId, &str> =
            catalog_items.iter().map(|c| (c.id, c.name.as_str())).collect();

        let mut recent: Vec<&Task> = tasks.iter().collect();
        recent.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        recent
            .into_iter()
            .take(self.settings.history_limit)
            .map(|task| TaskHistoryItem {
                id: task.id(),
                task_name: task
                    .catalog_id()
                    .and_then(|id| catalog_names.get(&id))
                    .map_or_else(|| self.settings.unnamed_task_label.clone(), |name| name.to_string()),
                doer_name: user_names
                    .get(&task.doer_id())
                    .map_or_else(|| self.settings.unknown_user_label.clone(), |name| name.to_string()),
                value: task.value(),
                date: task.created_at().to_rfc3339(),
            })
            .collect()
    }
}

/// One entry per roster user, most negative balance first. Ties keep roster order.
fn balance_views(users: &[User], balance_map: &HashMap<EntityId, UserBalance>) -> Vec<UserBalanceView> {
    let mut views: Vec<UserBalanceView> = users
        .iter()
        .map(|user| {
            let balance = balance_map
                .get(&user.id)
                .copied()
                .unwrap_or_else(|| UserBalance::zero(user.id));
            UserBalanceView {
                user_id: user.id,
                user_name: user.name.clone(),
                points_generated: balance.points_generated,
                points_consumed: balance.points_consumed,
                balance: balance.balance,
            }
        })
        .collect();

    views.sort_by(|a, b| a.balance.partial_cmp(&b.balance).unwrap_or(Ordering::Equal));
    views
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDashboard {
    pub group_id: EntityId,
    pub balances: Vec<UserBalanceView>,
    pub suggested_next_doer: Option<SuggestedDoer>,
    pub history: Vec<TaskHistoryItem>,
    pub catalog: Vec<CatalogItemSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBalanceView {
    pub user_id: EntityId,
    pub user_name: String,
    pub points_generated: f64,
    pub points_consumed: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedDoer {
    pub user_id: EntityId,
    pub user_name: String,
}

impl From<&User> for SuggestedDoer {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            user_name: user.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskHistoryItem {
    pub id: EntityId,
    pub task_name: String,
    pub doer_name: String,
    pub value: f64,
    /// RFC 3339 timestamp
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemSummary {
    pub id: EntityId,
    pub name: String,
    pub default_value: f64,
    pub icon: String,
}

impl From<&CatalogItem> for CatalogItemSummary {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            default_value: item.default_value,
            icon: item.icon.clone(),
        }
    }
}
