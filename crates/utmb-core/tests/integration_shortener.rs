//! Integration test: shortener adapter against a local HTTP server.
//!
//! Covers the success path and each error mapping end to end through libcurl.

mod common;

use utmb_core::config::ShortenerConfig;
use utmb_core::error::ErrorKind;
use utmb_core::shortener::{ShortenError, Shortener};

fn client(endpoint: &str) -> Shortener {
    Shortener::new(&ShortenerConfig {
        endpoint: endpoint.to_string(),
        provider: "tinyurl".to_string(),
        connect_timeout_secs: 2,
        timeout_secs: 5,
    })
    .expect("valid shortener config")
}

#[tokio::test]
async fn success_returns_trimmed_short_url() {
    let server = common::short_server::start(200, "  https://tinyurl.com/abc123\n");
    let short = client(&server.endpoint)
        .shorten("https://example.com/?utm_source=google&utm_medium=cpc")
        .await
        .expect("shorten");
    assert_eq!(short.short_url, "https://tinyurl.com/abc123");
    assert_eq!(short.provider, "tinyurl");

    let targets = server.targets();
    assert_eq!(targets.len(), 1);
    assert_eq!(
        targets[0],
        "/api/tinyurl?url=https%3A%2F%2Fexample.com%2F%3Futm_source%3Dgoogle%26utm_medium%3Dcpc"
    );
}

#[tokio::test]
async fn provider_override_changes_path() {
    let server = common::short_server::start(200, "https://is.gd/xyz");
    let short = client(&server.endpoint)
        .with_provider("isgd")
        .unwrap()
        .shorten("https://example.com/")
        .await
        .unwrap();
    assert_eq!(short.provider, "isgd");
    assert!(server.targets()[0].starts_with("/api/isgd?url="));
}

#[tokio::test]
async fn transport_failure_is_network_error() {
    let err = client(&common::short_server::closed_endpoint())
        .shorten("https://example.com/")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkError);
}

#[tokio::test]
async fn status_429_is_rate_limit() {
    let server = common::short_server::start(429, "Too Many Requests");
    let err = client(&server.endpoint)
        .shorten("https://example.com/")
        .await
        .unwrap_err();
    assert_eq!(err, ShortenError::RateLimit);
    assert_eq!(err.kind(), ErrorKind::RateLimit);
}

#[tokio::test]
async fn status_500_is_api_error() {
    let server = common::short_server::start(500, "boom");
    let err = client(&server.endpoint)
        .shorten("https://example.com/")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ApiError);
    assert!(matches!(err, ShortenError::Api { status: 500, .. }));
}

#[tokio::test]
async fn malformed_success_body_is_api_error() {
    let server = common::short_server::start(200, "Error: please try again later");
    let err = client(&server.endpoint)
        .shorten("https://example.com/")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ApiError);
}

#[tokio::test]
async fn oversized_body_is_api_error() {
    let body = format!("https://example.com/{}", "a".repeat(16 * 1024));
    let server = common::short_server::start(200, &body);
    let err = client(&server.endpoint)
        .shorten("https://example.com/")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ApiError);
}

#[tokio::test]
async fn non_http_input_never_reaches_the_server() {
    let server = common::short_server::start(200, "https://tinyurl.com/abc");
    let err = client(&server.endpoint)
        .shorten("file:///etc/passwd")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidUrl);
    assert!(server.targets().is_empty());
}
