//! Stable error-kind codes shared by every fallible operation in the core.

use std::fmt;

/// Machine-readable classification of a core failure.
///
/// Validation and shortener errors map onto these so callers (UI, CLI) can
/// render field-level feedback without matching on concrete error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Base URL (or shortener input) is empty, unparseable, or not http/https.
    InvalidUrl,
    /// Two emitted query keys collide.
    DuplicateKey,
    /// Transport-level failure talking to the shortener.
    NetworkError,
    /// Shortener answered 429.
    RateLimit,
    /// Shortener answered with an unexpected status or body.
    ApiError,
    /// Persisted history could not be read back. Internal only.
    PersistenceCorrupt,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidUrl => "INVALID_URL",
            ErrorKind::DuplicateKey => "DUPLICATE_KEY",
            ErrorKind::NetworkError => "NETWORK_ERROR",
            ErrorKind::RateLimit => "RATE_LIMIT",
            ErrorKind::ApiError => "API_ERROR",
            ErrorKind::PersistenceCorrupt => "PERSISTENCE_CORRUPT",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
