//! Pure validators over raw request fields.
//!
//! Both checks are deterministic functions of their arguments: no I/O and no
//! hidden state, so the construction engine can call them on every keystroke.

mod error;

use std::collections::HashSet;

use url::Url;

use crate::request::{QueryParameter, UtmParams};

pub use error::{InvalidUrlReason, ValidationError};

/// Parses `raw` as an absolute `http`/`https` URL.
///
/// Whitespace around the input is rejected rather than trimmed.
pub fn absolute_url_valid(raw: &str) -> Result<Url, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::invalid_url(InvalidUrlReason::Empty));
    }
    if raw.trim() != raw {
        return Err(ValidationError::invalid_url(
            InvalidUrlReason::SurroundingWhitespace,
        ));
    }

    let parsed = Url::parse(raw)
        .map_err(|e| ValidationError::invalid_url(InvalidUrlReason::Unparseable(e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ValidationError::invalid_url(
            InvalidUrlReason::UnsupportedScheme(other.to_string()),
        )),
    }
}

/// Query keys claimed by the UTM fields that carry a value.
pub fn reserved_keys(utm: &UtmParams) -> Vec<&'static str> {
    utm.iter_emitted().map(|(f, _)| f.query_key()).collect()
}

/// Fails on the first emitted custom key that repeats an earlier custom key or
/// one of `reserved_keys`.
///
/// Comparison is exact and case-sensitive on the trimmed key; pairs that will
/// not be emitted (blank key or value) never collide.
pub fn no_duplicate_keys(
    reserved_keys: &[&str],
    custom_params: &[QueryParameter],
) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = reserved_keys.iter().copied().collect();

    for (index, param) in custom_params.iter().enumerate() {
        let Some((key, _)) = param.emitted() else {
            continue;
        };
        if !seen.insert(key) {
            return Err(ValidationError::DuplicateKey {
                key: key.to_string(),
                index,
            });
        }
    }

    Ok(())
}
