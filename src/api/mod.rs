//! API module
//!
//! HTTP routing layer around the expense store.

pub mod extractors;
pub mod middleware;
pub mod routes;

use axum::{extract::State, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsOrigins;
use crate::error::AppError;
use crate::store::{ExpenseStore, StoreError};

pub use routes::create_router;

/// Build the full application: routes, logging, correlation ids, tracing and CORS.
///
/// Axum layers wrap in reverse order, so the request passes through
/// CORS -> trace -> set correlation id -> propagate correlation id -> logging -> handler.
pub fn build_app(store: ExpenseStore, cors: &CorsOrigins) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(create_router())
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(PropagateRequestIdLayer::new(
            middleware::correlation_id_header(),
        ))
        .layer(SetRequestIdLayer::new(
            middleware::correlation_id_header(),
            middleware::MakeCorrelationId,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer(cors))
        .with_state(store)
}

/// Health check endpoint; fails when the store cannot be reached
async fn health_check(State(store): State<ExpenseStore>) -> Result<&'static str, AppError> {
    crate::db::verify_connection(store.pool())
        .await
        .map_err(StoreError::from)?;
    Ok("OK")
}
