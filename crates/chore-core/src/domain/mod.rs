//! # Chore Core - Domain Module
//! 
//! Domain entities for the chore ledger.

pub mod user;
pub mod task;
pub mod catalog_item;
pub mod user_balance;

// Re-export all entities
pub use user::User;
pub use task::Task;
pub use catalog_item::CatalogItem;
pub use user_balance::UserBalance;
