//! Error types for request validation.

use thiserror::Error;

use crate::error::ErrorKind;

/// Why a base URL was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidUrlReason {
    Empty,
    /// Leading or trailing whitespace; trimming is the caller's call.
    SurroundingWhitespace,
    Unparseable(url::ParseError),
    UnsupportedScheme(String),
}

/// A request the construction engine refuses to build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid URL: {}", describe(.reason))]
    InvalidUrl { reason: InvalidUrlReason },

    /// `index` is the position of the offending entry in `custom_params`.
    #[error("duplicate query key `{key}` (custom parameter #{})", .index + 1)]
    DuplicateKey { key: String, index: usize },
}

impl ValidationError {
    pub(crate) fn invalid_url(reason: InvalidUrlReason) -> Self {
        ValidationError::InvalidUrl { reason }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            ValidationError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
        }
    }
}

fn describe(reason: &InvalidUrlReason) -> String {
    match reason {
        InvalidUrlReason::Empty => "base URL is empty".to_string(),
        InvalidUrlReason::SurroundingWhitespace => {
            "base URL has leading or trailing whitespace".to_string()
        }
        InvalidUrlReason::Unparseable(e) => e.to_string(),
        InvalidUrlReason::UnsupportedScheme(s) => {
            format!("scheme `{s}` is not supported (use http or https)")
        }
    }
}
