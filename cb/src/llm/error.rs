//! Generation error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while asking the model for a reply
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl GenerationError {
    /// Check if this error is worth retrying
    pub fn is_retryable(&self) -> bool {
        match self {
            GenerationError::RateLimited { .. } => true,
            GenerationError::ApiError { status, .. } => is_retryable_status(*status),
            GenerationError::Network(_) => true,
            GenerationError::Timeout(_) => true,
            GenerationError::InvalidResponse(_) => false,
        }
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 500 | 502 | 503 | 504)
}
