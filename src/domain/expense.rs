//! Expense record types

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use super::amount::{Amount, AMOUNT_SCALE};
use super::error::ValidationError;

/// A persisted expense, exactly as stored in the `expenses` table.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Expense {
    pub id: i32,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    pub date_created: NaiveDateTime,
}

impl Expense {
    /// Pin the amount to two fractional digits.
    ///
    /// Postgres hands back `NUMERIC` zero without its scale, and callers rely
    /// on `12.50` never turning into `12.5`.
    pub fn with_fixed_scale(mut self) -> Self {
        self.amount.rescale(AMOUNT_SCALE);
        self
    }
}

/// The caller-supplied, mutable part of an expense after validation.
///
/// Used for both create and update; `id` and `date_created` are never
/// caller-controlled.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    title: String,
    amount: Amount,
    category: String,
}

impl ExpenseDraft {
    /// Validate the three mutable fields.
    ///
    /// Text is kept verbatim; only empty or whitespace-only values are rejected.
    pub fn new(
        title: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let category = category.into();

        if title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        if category.trim().is_empty() {
            return Err(ValidationError::EmptyField("category"));
        }
        let amount = Amount::new(amount)?;

        Ok(Self {
            title,
            amount,
            category,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AmountError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_draft_valid() {
        let draft = ExpenseDraft::new("Coffee", dec!(4.5), "food").unwrap();
        assert_eq!(draft.title(), "Coffee");
        assert_eq!(draft.amount().value(), dec!(4.50));
        assert_eq!(draft.category(), "food");
    }

    #[test]
    fn test_draft_keeps_text_verbatim() {
        let draft = ExpenseDraft::new(" Lunch ", dec!(10), "Food & Drink").unwrap();
        assert_eq!(draft.title(), " Lunch ");
        assert_eq!(draft.category(), "Food & Drink");
    }

    #[test]
    fn test_draft_rejects_empty_title() {
        let err = ExpenseDraft::new("", dec!(1), "food").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField("title"));

        let err = ExpenseDraft::new("   ", dec!(1), "food").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField("title"));
    }

    #[test]
    fn test_draft_rejects_empty_category() {
        let err = ExpenseDraft::new("Bus", dec!(2), "\t").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField("category"));
    }

    #[test]
    fn test_draft_rejects_bad_amount() {
        let err = ExpenseDraft::new("Bus", dec!(2.001), "transport").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidAmount(AmountError::TooManyDecimals(3))
        );
    }

    #[test]
    fn test_draft_allows_refund() {
        let draft = ExpenseDraft::new("Refund", dec!(-20), "shopping").unwrap();
        assert!(draft.amount().is_negative());
    }

    #[test]
    fn test_with_fixed_scale() {
        let expense = Expense {
            id: 2,
            title: "Sample".to_string(),
            amount: Decimal::ZERO,
            category: "misc".to_string(),
            date_created: chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
        .with_fixed_scale();

        assert_eq!(expense.amount.to_string(), "0.00");
    }

    #[test]
    fn test_expense_serializes_amount_as_fixed_point_string() {
        let expense = Expense {
            id: 1,
            title: "Coffee".to_string(),
            amount: dec!(12.50),
            category: "food".to_string(),
            date_created: chrono::NaiveDate::from_ymd_opt(2026, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap(),
        };

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["amount"], "12.50");
        assert_eq!(json["category"], "food");
        assert_eq!(json["date_created"], "2026-01-02T03:04:05");
    }
}
