//! # StableMusicSPAI Common Library
//!
//! Shared code for the SPAI microservices including:
//! - Error types
//! - API request/response types shared across modules
//! - HTTP serve loop with graceful shutdown

pub mod api;
pub mod error;
pub mod serve;

pub use error::{Error, Result};
