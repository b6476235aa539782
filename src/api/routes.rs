//! API Routes
//!
//! HTTP endpoint definitions for the expense resource.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::extractors::{ExpenseId, ValidJson};
use crate::domain::{Expense, ExpenseDraft};
use crate::error::AppError;
use crate::store::ExpenseStore;

// =========================================================================
// Request/Response types
// =========================================================================

/// Body of create and update requests.
///
/// `amount` accepts a JSON number (`4.5`) or a decimal string (`"4.50"`).
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpenseRequest {
    pub title: String,
    pub amount: Decimal,
    pub category: String,
}

impl TryFrom<ExpenseRequest> for ExpenseDraft {
    type Error = AppError;

    fn try_from(request: ExpenseRequest) -> Result<Self, Self::Error> {
        Ok(ExpenseDraft::new(
            request.title,
            request.amount,
            request.category,
        )?)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateExpenseResponse {
    pub status: String,
    pub id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the expense router
pub fn create_router() -> Router<ExpenseStore> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/:expense_id",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}

// =========================================================================
// GET /expenses
// =========================================================================

/// List all expenses, most recent first
async fn list_expenses(State(store): State<ExpenseStore>) -> Result<Json<Vec<Expense>>, AppError> {
    let expenses = store.list().await?;
    Ok(Json(expenses))
}

// =========================================================================
// POST /expenses
// =========================================================================

/// Create a new expense
async fn create_expense(
    State(store): State<ExpenseStore>,
    ValidJson(request): ValidJson<ExpenseRequest>,
) -> Result<(StatusCode, Json<CreateExpenseResponse>), AppError> {
    let draft = ExpenseDraft::try_from(request)?;

    let id = store.create(&draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateExpenseResponse {
            status: "success".to_string(),
            id,
        }),
    ))
}

// =========================================================================
// GET /expenses/:expense_id
// =========================================================================

/// Get a single expense
async fn get_expense(
    State(store): State<ExpenseStore>,
    ExpenseId(id): ExpenseId,
) -> Result<Json<Expense>, AppError> {
    let expense = store.get(id).await?;
    Ok(Json(expense))
}

// =========================================================================
// PUT /expenses/:expense_id
// =========================================================================

/// Replace title, amount and category of an expense
async fn update_expense(
    State(store): State<ExpenseStore>,
    ExpenseId(id): ExpenseId,
    ValidJson(request): ValidJson<ExpenseRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let draft = ExpenseDraft::try_from(request)?;

    store.update(id, &draft).await?;

    Ok(Json(StatusResponse {
        status: "success".to_string(),
    }))
}

// =========================================================================
// DELETE /expenses/:expense_id
// =========================================================================

/// Permanently delete an expense
async fn delete_expense(
    State(store): State<ExpenseStore>,
    ExpenseId(id): ExpenseId,
) -> Result<Json<StatusResponse>, AppError> {
    store.delete(id).await?;

    Ok(Json(StatusResponse {
        status: "deleted".to_string(),
    }))
}
