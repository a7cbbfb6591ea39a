//! Pure checks on shortener input and responses.

use url::Url;

use super::ShortenError;

fn is_http_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Rejects anything that is not an absolute http/https URL.
pub(crate) fn check_input(url: &str) -> Result<(), ShortenError> {
    if is_http_url(url) {
        Ok(())
    } else {
        Err(ShortenError::InvalidUrl(format!(
            "expected an http or https URL, got {url:?}"
        )))
    }
}

/// Maps an HTTP status and body to the short URL or an error.
///
/// Status 0 means no response was received. A 2xx body must be exactly one
/// http/https URL, surrounding whitespace allowed.
pub(crate) fn interpret_response(status: u32, body: &[u8]) -> Result<String, ShortenError> {
    match status {
        0 => return Err(ShortenError::Network("no HTTP response".to_string())),
        429 => return Err(ShortenError::RateLimit),
        200..=299 => {}
        other => return Err(ShortenError::api(other, "unexpected status")),
    }

    let text = std::str::from_utf8(body)
        .map_err(|_| ShortenError::api(status, "response body is not UTF-8"))?;
    let candidate = text.trim();
    if candidate.is_empty() {
        return Err(ShortenError::api(status, "empty response body"));
    }
    if candidate.chars().any(char::is_whitespace) || !is_http_url(candidate) {
        return Err(ShortenError::api(
            status,
            "response body is not a bare http(s) URL",
        ));
    }
    Ok(candidate.to_string())
}
