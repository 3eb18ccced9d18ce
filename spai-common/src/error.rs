//! Common error types for SPAI services

use thiserror::Error;

/// Common result type for SPAI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the SPAI microservices
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP server errors
    #[error("HTTP server error: {0}")]
    Http(String),
}
