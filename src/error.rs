//! Emoscope error types

use std::time::Duration;

/// Emoscope error types
#[derive(Debug, thiserror::Error)]
pub enum EmoscopeError {
    /// No text was provided to analyze.
    #[error("no text provided")]
    EmptyInput,

    // Upstream/network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("authentication failed")]
    AuthenticationFailed,

    /// Upstream rejected the document (blank or otherwise unusable text).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty response from classifier")]
    EmptyResponse,

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl EmoscopeError {
    /// Whether a retry might succeed.
    ///
    /// Transport failures, rate limits, 5xx responses, and empty payloads
    /// are transient; everything else is terminal.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) | Self::RateLimited { .. } | Self::EmptyResponse => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Retry-after hint from a rate-limit response, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

/// Result type alias for emoscope operations
pub type Result<T> = std::result::Result<T, EmoscopeError>;
