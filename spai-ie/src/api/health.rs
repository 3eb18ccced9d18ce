//! Health check endpoint

use axum::{routing::get, Json, Router};
use spai_common::api::HealthResponse;

/// GET /health
///
/// Health check endpoint for monitoring.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok("spai-ie", env!("CARGO_PKG_VERSION")))
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}
