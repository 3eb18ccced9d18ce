//! Marketing prediction endpoint
//!
//! Predicts a listener's propensity to subscribe and assigns an advertising
//! segment. The "prediction" is the placeholder rule in
//! [`crate::model::marketing`]; no model is invoked.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::info;

use crate::model::marketing::segment_listener;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Listener data for segmentation
///
/// `demographics` is an open-ended map; the source enforces no schema on it
/// and neither do we.
#[derive(Debug, Deserialize)]
pub struct UserData {
    pub user_id: String,
    pub listening_history: Vec<String>,
    pub demographics: HashMap<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct MarketingPrediction {
    pub user_id: String,
    pub propensity_to_subscribe: f64,
    pub ad_segment: String,
}

// ============================================================================
// Handler
// ============================================================================

/// POST /marketing/predict_propensity
///
/// Pure function of the listening-history length; identical requests yield
/// identical responses.
pub async fn predict_propensity(Json(data): Json<UserData>) -> Json<MarketingPrediction> {
    let segmentation = segment_listener(data.listening_history.len());

    info!(
        "Segmented user {} ({} history items) as {}",
        data.user_id,
        data.listening_history.len(),
        segmentation.segment
    );

    Json(MarketingPrediction {
        user_id: data.user_id,
        propensity_to_subscribe: segmentation.propensity,
        ad_segment: segmentation.segment.to_string(),
    })
}
