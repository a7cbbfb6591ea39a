//! Shortener error type.

use thiserror::Error;

use crate::error::ErrorKind;

/// Failure of a single shorten call. Never retried by the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    /// Input is not an absolute http/https URL; no request was sent.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// Transport failure or no HTTP status at all.
    #[error("network error: {0}")]
    Network(String),
    /// Service answered 429.
    #[error("rate limited by shortener")]
    RateLimit,
    /// Unexpected status, or a success response whose body is not a bare URL.
    #[error("shortener API error (HTTP {status}): {reason}")]
    Api { status: u32, reason: String },
}

impl ShortenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShortenError::InvalidUrl(_) => ErrorKind::InvalidUrl,
            ShortenError::Network(_) => ErrorKind::NetworkError,
            ShortenError::RateLimit => ErrorKind::RateLimit,
            ShortenError::Api { .. } => ErrorKind::ApiError,
        }
    }

    pub(crate) fn api(status: u32, reason: impl Into<String>) -> Self {
        ShortenError::Api {
            status,
            reason: reason.into(),
        }
    }
}

impl From<curl::Error> for ShortenError {
    fn from(e: curl::Error) -> Self {
        ShortenError::Network(e.to_string())
    }
}
