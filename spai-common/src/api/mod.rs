//! Shared API types for SPAI services

pub mod types;

pub use types::{ErrorDetail, HealthResponse};
