//! Domain module
//!
//! Expense types and validation rules.

pub mod amount;
pub mod error;
pub mod expense;

pub use amount::{Amount, AmountError, AMOUNT_SCALE};
pub use error::ValidationError;
pub use expense::{Expense, ExpenseDraft};
