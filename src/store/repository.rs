//! Expense Store
//!
//! Owns every read and write of the `expenses` table. The handle is cheap to
//! clone; all state lives in Postgres.

use sqlx::PgPool;

use super::error::StoreError;
use crate::domain::{Expense, ExpenseDraft};

/// Explicitly constructed store handle, shared by the routing layer.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    pool: PgPool,
}

impl ExpenseStore {
    /// Create a new ExpenseStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying pool, for health checks and shutdown
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // =========================================================================
    // create
    // =========================================================================

    /// Insert a new expense and return its server-assigned id.
    ///
    /// `id` comes from the table sequence and `date_created` from the column
    /// default, so neither can be influenced by the caller.
    pub async fn create(&self, draft: &ExpenseDraft) -> Result<i32, StoreError> {
        let mut tx = self.pool.begin().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO expenses (title, amount, category)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(draft.title())
        .bind(draft.amount().value())
        .bind(draft.category())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            "Expense {} created: {} ({}, {})",
            id,
            draft.title(),
            draft.amount(),
            draft.category()
        );

        Ok(id)
    }

    // =========================================================================
    // list
    // =========================================================================

    /// All expenses, most recent first. Equal timestamps keep insertion order.
    pub async fn list(&self) -> Result<Vec<Expense>, StoreError> {
        let expenses: Vec<Expense> = sqlx::query_as(
            r#"
            SELECT id, title, amount, category, date_created
            FROM expenses
            ORDER BY date_created DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!("Listed {} expenses", expenses.len());

        Ok(expenses.into_iter().map(Expense::with_fixed_scale).collect())
    }

    // =========================================================================
    // get
    // =========================================================================

    /// Fetch a single expense by id
    pub async fn get(&self, id: i32) -> Result<Expense, StoreError> {
        let expense: Option<Expense> = sqlx::query_as(
            r#"
            SELECT id, title, amount, category, date_created
            FROM expenses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        expense.map(Expense::with_fixed_scale).ok_or_else(|| {
            tracing::warn!("Expense {} not found", id);
            StoreError::NotFound(id)
        })
    }

    // =========================================================================
    // update
    // =========================================================================

    /// Replace title, amount and category of an existing expense.
    ///
    /// `id` and `date_created` are left untouched. Returns the updated record.
    pub async fn update(&self, id: i32, draft: &ExpenseDraft) -> Result<Expense, StoreError> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<Expense> = sqlx::query_as(
            r#"
            UPDATE expenses
            SET title = $1, amount = $2, category = $3
            WHERE id = $4
            RETURNING id, title, amount, category, date_created
            "#,
        )
        .bind(draft.title())
        .bind(draft.amount().value())
        .bind(draft.category())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(expense) = updated else {
            tracing::warn!("Update of expense {} affected no rows", id);
            return Err(StoreError::NotFound(id));
        };

        tx.commit().await?;

        tracing::debug!("Expense {} updated", id);

        Ok(expense.with_fixed_scale())
    }

    // =========================================================================
    // delete
    // =========================================================================

    /// Permanently remove an expense. Ids are never reused afterwards.
    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        let rows_affected = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            tracing::warn!("Delete of expense {} affected no rows", id);
            return Err(StoreError::NotFound(id));
        }

        tx.commit().await?;

        tracing::debug!("Expense {} deleted", id);

        Ok(())
    }
}
