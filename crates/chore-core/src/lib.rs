//! # Chore Core
//! 
//! Domain entities, the balance calculator, repository traits, and
//! application services for the shared-chore ledger.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use services::BalanceCalculator;
