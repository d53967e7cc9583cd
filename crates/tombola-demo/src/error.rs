//! Tombola demo — error types.

use thiserror::Error;
use tombola_core::error::TombolaError;

/// Startup and runtime errors for the demo binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A container operation failed.
    #[error("container error: {0}")]
    Tombola(#[from] TombolaError),

    /// The report could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
