//! In-memory repositories over a JSON ledger snapshot

pub mod store;
pub mod user_repo_impl;
pub mod task_repo_impl;
pub mod catalog_repo_impl;

pub use store::{LedgerSnapshot, LedgerStore};
pub use user_repo_impl::MemoryUserRepository;
pub use task_repo_impl::MemoryTaskRepository;
pub use catalog_repo_impl::MemoryCatalogRepository;
