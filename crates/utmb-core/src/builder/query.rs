//! Projects a request onto the ordered list of query entries to emit.

use crate::request::UrlBuildRequest;

/// `(key, value)` pairs in emission order: UTM fields in canonical order, then
/// custom parameters in insertion order. Blank entries are dropped.
pub(crate) fn query_entries(request: &UrlBuildRequest) -> Vec<(&str, &str)> {
    request
        .utm
        .iter_emitted()
        .map(|(field, value)| (field.query_key(), value))
        .chain(request.emitted_custom_params())
        .collect()
}
