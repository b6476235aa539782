//! Domain Error Types
//!
//! Validation failures raised before anything touches the store.

use thiserror::Error;

use super::amount::AmountError;

/// Caller errors in an expense payload.
///
/// These are never retried; the message names the offending field so the
/// request can be corrected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Required text field is empty or whitespace only
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// Amount does not fit the fixed-point column
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField(field) => field,
            Self::InvalidAmount(_) => "amount",
        }
    }
}
