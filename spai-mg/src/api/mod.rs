//! HTTP API handlers for spai-mg

pub mod handlers;
pub mod health;

pub use handlers::{generate_music, home};
pub use health::health_routes;
