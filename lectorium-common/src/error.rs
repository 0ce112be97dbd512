//! Common error types for Lectorium

use thiserror::Error;

/// Common result type for Lectorium operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures loading Lectorium input files and configuration
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON document could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
