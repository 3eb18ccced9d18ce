//! Logistics optimization endpoint
//!
//! Selects a fulfillment provider and delivery ETA for a print-on-demand
//! order. The "optimization" is the placeholder rule in
//! [`crate::model::logistics`]; no routing is actually computed.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::logistics::select_provider;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Order data for provider selection; none of the fields are validated
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub order_id: String,
    pub destination_zip: String,
    pub product_type: String,
}

#[derive(Debug, Serialize)]
pub struct LogisticsSolution {
    pub order_id: String,
    pub selected_provider: String,
    pub estimated_delivery_eta: String,
}

// ============================================================================
// Handler
// ============================================================================

/// POST /logistics/optimize_order
///
/// Pure function of the zip code's first character; identical requests
/// yield identical responses.
pub async fn optimize_order(Json(order): Json<OrderRequest>) -> Json<LogisticsSolution> {
    let route = select_provider(&order.destination_zip);

    info!(
        "Order {} (zip {}) routed to {}",
        order.order_id, order.destination_zip, route.provider
    );

    Json(LogisticsSolution {
        order_id: order.order_id,
        selected_provider: route.provider.to_string(),
        estimated_delivery_eta: route.eta.to_string(),
    })
}
