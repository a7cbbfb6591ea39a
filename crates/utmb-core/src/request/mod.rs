//! Unvalidated build requests: base URL, UTM fields, and custom parameters.

mod utm;

pub use utm::{UtmField, UtmParams};

use serde::{Deserialize, Serialize};

use crate::validate::{self, ValidationError};

/// A user-defined query parameter. Order within a request is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameter {
    pub key: String,
    pub value: String,
}

impl QueryParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Trimmed `(key, value)` when both are non-empty, i.e. when the pair is
    /// part of the final URL.
    pub fn emitted(&self) -> Option<(&str, &str)> {
        let key = self.key.trim();
        let value = self.value.trim();
        if key.is_empty() || value.is_empty() {
            None
        } else {
            Some((key, value))
        }
    }
}

/// What the user typed, before validation.
///
/// May transiently hold half-filled custom parameters; those are skipped when
/// the URL is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlBuildRequest {
    pub base_url: String,
    pub utm: UtmParams,
    pub custom_params: Vec<QueryParameter>,
}

impl UrlBuildRequest {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_utm(mut self, field: UtmField, value: &str) -> Self {
        self.utm.set(field, value);
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_params.push(QueryParameter::new(key, value));
        self
    }

    /// Custom parameters that will be emitted, trimmed, in insertion order.
    pub fn emitted_custom_params(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.custom_params.iter().filter_map(QueryParameter::emitted)
    }

    /// Decomposes an existing absolute URL into a request.
    ///
    /// A leading run of non-blank `utm_*` pairs in canonical order fills the
    /// UTM fields. Everything from the first pair that breaks that run onward
    /// becomes a custom parameter, in order, so rebuilding the result yields
    /// the same query string. The base URL is the input with its query removed.
    pub fn from_url(raw: &str) -> Result<Self, ValidationError> {
        let mut parsed = validate::absolute_url_valid(raw)?;
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        parsed.set_query(None);

        let mut request = UrlBuildRequest::new(parsed.as_str());
        let mut in_utm_run = true;
        let mut last_field: Option<UtmField> = None;
        for (key, value) in pairs {
            let field = UtmField::from_query_key(&key).filter(|f| {
                in_utm_run
                    && value.trim() == value
                    && !value.is_empty()
                    && last_field.map_or(true, |last| (last as usize) < (*f as usize))
            });
            match field {
                Some(field) => {
                    request.utm.set(field, &value);
                    last_field = Some(field);
                }
                None => {
                    in_utm_run = false;
                    request.custom_params.push(QueryParameter::new(key, value));
                }
            }
        }
        Ok(request)
    }
}
