//! HTTP request handlers
//!
//! Implements the welcome endpoint and the simulated music generation
//! endpoint. User-facing strings are in Spanish and consumed verbatim by the
//! existing front-end, so they must not be reworded.

use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use spai_common::api::ErrorDetail;
use tracing::info;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Optional so a missing field reaches the handler instead of failing
    /// deserialization; missing and empty are rejected identically
    #[serde(default)]
    prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    status: String,
    track_id: String,
    prompt_used: String,
    audio_url: String,
    message: String,
}

// ============================================================================
// Welcome Endpoint
// ============================================================================

/// GET / - Welcome message, doubles as a liveness probe for the front-end
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "API de StableMusicSPAI está operativa. Lista para generar música.".to_string(),
    })
}

// ============================================================================
// Music Generation Endpoint
// ============================================================================

/// POST /generate_music - Simulate generating a music track from a prompt
///
/// Suspends for a randomized 2-5 s standing in for model inference, then
/// returns a fabricated track id and a placeholder audio URL embedding it.
/// The sleep suspends only this request's task; concurrent requests proceed
/// independently.
pub async fn generate_music(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorDetail>)> {
    let prompt = match req.prompt {
        Some(p) if !p.is_empty() => p,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorDetail::new("Se requiere el campo 'prompt'.")),
            ));
        }
    };

    info!("Received generation request with prompt: {}", prompt);

    // Simulated inference time
    tokio::time::sleep(state.tracks.processing_delay()).await;

    let track_id = state.tracks.next_track_id().to_string();
    let audio_url = format!("https://ejemplo.com/audio/spai_track_{}.mp3", track_id);

    info!("Generated simulated track {}", track_id);

    Ok(Json(GenerateResponse {
        status: "success".to_string(),
        track_id,
        prompt_used: prompt,
        audio_url,
        message: "Pista musical simulada generada correctamente por StableMusicSPAI.".to_string(),
    }))
}
