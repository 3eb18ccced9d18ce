//! spai-mg library - Music Generation module
//!
//! Simulated music generation service for StableMusicSPAI. Validates a text
//! prompt, waits a randomized duration standing in for model inference, and
//! returns a fabricated track identifier and audio URL.

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod synth;

use synth::TrackSource;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Track id / delay provider (randomized in production, fixed in tests)
    pub tracks: Arc<dyn TrackSource>,
}

impl AppState {
    /// Create new application state
    pub fn new(tracks: Arc<dyn TrackSource>) -> Self {
        Self { tracks }
    }
}

/// Build application router
///
/// CORS allows any origin/method/header with credentials, so the static
/// front-end hosted on another domain can call the API directly.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::handlers::home))
        .route("/generate_music", post(api::handlers::generate_music))
        .merge(api::health::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
