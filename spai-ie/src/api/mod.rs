//! HTTP API handlers for spai-ie

pub mod health;
pub mod logistics;
pub mod marketing;

pub use health::health_routes;
pub use logistics::optimize_order;
pub use marketing::predict_propensity;
