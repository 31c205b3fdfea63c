//! Database adapters

pub mod memory;

pub use memory::{LedgerSnapshot, LedgerStore, MemoryCatalogRepository, MemoryTaskRepository, MemoryUserRepository};
