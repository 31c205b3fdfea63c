//! Domain and application services

pub mod balance_calculator;
pub mod task_service;
pub mod dashboard_service;
pub mod catalog_service;

pub use balance_calculator::{is_balanced, total_balance, BalanceCalculator};
pub use task_service::{CreateTaskInput, TaskCreated, TaskService};
pub use dashboard_service::{
    CatalogItemSummary, DashboardService, DashboardSettings, GroupDashboard, SuggestedDoer,
    TaskHistoryItem, UserBalanceView,
};
pub use catalog_service::{CatalogService, CreateCatalogItemInput, UpdateCatalogItemInput};
