//! Shared API request/response types
//!
//! Types used by both SPAI modules:
//! - spai-mg (Music Generation)
//! - spai-ie (IA Engine)

use serde::{Deserialize, Serialize};

/// Health check response returned by every module's `GET /health`
///
/// `module` carries the module short name (e.g. "spai-mg") so monitoring
/// can tell the services apart when they run behind one gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

impl HealthResponse {
    /// Build an "ok" health response for the given module
    pub fn ok(module: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            module: module.to_string(),
            version: version.to_string(),
        }
    }
}

/// Validation error body, FastAPI-compatible shape: `{"detail": "..."}`
///
/// The front-end already consumes this shape, so it is part of the wire
/// contract and must not be renamed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
