//! URL construction engine.
//!
//! Turns a [`UrlBuildRequest`] into a [`ConstructedUrl`]. The engine is
//! stateless: every call validates and serializes from scratch, so the live
//! preview simply calls [`build`] again whenever any field changes.

mod query;

use crate::request::UrlBuildRequest;
use crate::validate::{self, ValidationError};

/// A validated, serialized URL and its derived metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructedUrl {
    final_url: String,
    character_count: usize,
    parameter_count: usize,
}

impl ConstructedUrl {
    pub fn final_url(&self) -> &str {
        &self.final_url
    }

    /// Length of `final_url` in characters.
    pub fn character_count(&self) -> usize {
        self.character_count
    }

    /// Number of query entries actually emitted (UTM + custom).
    pub fn parameter_count(&self) -> usize {
        self.parameter_count
    }

    pub fn into_final_url(self) -> String {
        self.final_url
    }
}

/// Validates `request` and serializes it into a final URL.
///
/// The base URL's path and fragment are kept; any query it already carries is
/// replaced by the generated parameters. Keys and values are encoded with
/// `application/x-www-form-urlencoded` rules (space becomes `+`).
pub fn build(request: &UrlBuildRequest) -> Result<ConstructedUrl, ValidationError> {
    let mut url = validate::absolute_url_valid(&request.base_url)?;
    validate::no_duplicate_keys(
        &validate::reserved_keys(&request.utm),
        &request.custom_params,
    )?;

    let entries = query::query_entries(request);

    url.set_query(None);
    if !entries.is_empty() {
        url.query_pairs_mut().extend_pairs(entries.iter().copied());
    }

    let final_url: String = url.into();
    let character_count = final_url.chars().count();

    tracing::trace!(
        url = %final_url,
        params = entries.len(),
        "built url"
    );

    Ok(ConstructedUrl {
        final_url,
        character_count,
        parameter_count: entries.len(),
    })
}
