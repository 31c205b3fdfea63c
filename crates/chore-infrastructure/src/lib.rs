//! # Chore Infrastructure
//! 
//! Storage implementations (adapters) of the chore-core repository traits.

pub mod database;

pub use database::{LedgerSnapshot, LedgerStore, MemoryCatalogRepository, MemoryTaskRepository, MemoryUserRepository};
