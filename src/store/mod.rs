//! Store module
//!
//! Persistence and retrieval of expense records.

mod error;
mod repository;

pub use error::StoreError;
pub use repository::ExpenseStore;
