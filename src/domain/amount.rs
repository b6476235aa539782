//! Amount type
//!
//! Fixed-point monetary value stored in a `NUMERIC(10,2)` column.
//! Sign is unconstrained: refunds are negative expenses.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Fractional digits kept for every amount
pub const AMOUNT_SCALE: u32 = 2;

/// Smallest magnitude that no longer fits `NUMERIC(10,2)`
const MAX_MAGNITUDE: i64 = 100_000_000;

/// Amount represents a validated expense amount.
///
/// # Invariants
/// - At most 2 decimal places (trailing zeros are ignored, so `4.500` is fine)
/// - Absolute value below 100,000,000
/// - Always carried at scale 2
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use expense_tracker::domain::Amount;
///
/// let amount = Amount::new(Decimal::new(45, 1)).unwrap();
/// assert_eq!(amount.to_string(), "4.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

/// Errors that can occur when creating an Amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount has too many decimal places (max {AMOUNT_SCALE}, got {0})")]
    TooManyDecimals(u32),

    #[error("Amount {0} exceeds the maximum magnitude of 99999999.99")]
    Overflow(Decimal),

    #[error("Invalid amount format: {0}")]
    ParseError(String),
}

impl Amount {
    /// Create a new Amount with validation.
    ///
    /// # Errors
    /// - `AmountError::TooManyDecimals` if more than 2 significant decimal places
    /// - `AmountError::Overflow` if the value does not fit `NUMERIC(10,2)`
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        let normalized = value.normalize();
        if normalized.scale() > AMOUNT_SCALE {
            return Err(AmountError::TooManyDecimals(normalized.scale()));
        }

        if normalized.abs() >= Decimal::from(MAX_MAGNITUDE) {
            return Err(AmountError::Overflow(value));
        }

        let mut scaled = normalized;
        scaled.rescale(AMOUNT_SCALE);
        Ok(Self(scaled))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// True for refunds and corrections.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal =
            Decimal::from_str(s.trim()).map_err(|e| AmountError::ParseError(e.to_string()))?;
        Amount::new(decimal)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
