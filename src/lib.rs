//! expense_tracker Library
//!
//! Expense store, HTTP routing layer and bootstrap helpers. Re-exported for
//! the binaries and integration tests.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod logging;
pub mod store;

mod error;

pub use config::Config;
pub use domain::{Amount, AmountError, Expense, ExpenseDraft, ValidationError};
pub use error::{AppError, ErrorResponse};
pub use store::{ExpenseStore, StoreError};
