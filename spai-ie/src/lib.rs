//! spai-ie library - IA Engine module
//!
//! Rule-based mock predictions for the StableMusicSPAI platform: marketing
//! propensity/segmentation and logistics provider selection. Both handlers
//! are stateless pure functions of their input payloads; the decision rules
//! live in [`model`] and the HTTP layer in [`api`].

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod model;

/// Build application router
///
/// CORS allows any origin/method/header with credentials, so the static
/// front-end hosted on another domain can call the API directly.
pub fn build_router() -> Router {
    use axum::routing::post;

    Router::new()
        .route(
            "/marketing/predict_propensity",
            post(api::marketing::predict_propensity),
        )
        .route(
            "/logistics/optimize_order",
            post(api::logistics::optimize_order),
        )
        .merge(api::health::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
