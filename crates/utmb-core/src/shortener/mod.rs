//! URL shortener adapter.
//!
//! Uses the curl crate (libcurl) to call a shortening proxy:
//! `GET <endpoint>/api/<provider>?url=<url>`, expecting the short URL as a bare
//! text body. Input is checked locally before any request goes out. Failed
//! calls are returned to the caller as-is; nothing here retries.

mod error;
mod parse;

pub use error::ShortenError;

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

use crate::config::ShortenerConfig;

/// Upper bound on the response body; a short URL never comes close.
const MAX_BODY_BYTES: usize = 8 * 1024;

/// A successfully shortened URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub short_url: String,
    pub provider: String,
}

/// Client for one shortening endpoint and provider.
#[derive(Debug, Clone)]
pub struct Shortener {
    endpoint: Url,
    provider: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl Shortener {
    /// Builds a client from config. Fails if the endpoint is not an http(s)
    /// URL or the provider name is empty.
    pub fn new(cfg: &ShortenerConfig) -> Result<Self> {
        let endpoint = Url::parse(&cfg.endpoint)
            .with_context(|| format!("invalid shortener endpoint: {}", cfg.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            anyhow::bail!("shortener endpoint must be http or https: {}", cfg.endpoint);
        }
        let provider = cfg.provider.trim();
        if provider.is_empty() {
            anyhow::bail!("shortener provider must not be empty");
        }
        Ok(Self {
            endpoint,
            provider: provider.to_string(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        })
    }

    /// Same client, different provider.
    pub fn with_provider(mut self, provider: &str) -> Result<Self> {
        let provider = provider.trim();
        if provider.is_empty() {
            anyhow::bail!("shortener provider must not be empty");
        }
        self.provider = provider.to_string();
        Ok(self)
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// `<endpoint>/api/<provider>?url=<target>` with the target form-encoded.
    pub fn request_url(&self, target: &str) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("api").push(&self.provider);
        }
        url.query_pairs_mut().clear().append_pair("url", target);
        url
    }

    /// Shortens `url` on tokio's blocking pool. Dropping the future abandons
    /// the result; the transfer itself finishes or times out in the background.
    pub async fn shorten(&self, url: &str) -> Result<ShortUrl, ShortenError> {
        parse::check_input(url)?;
        let this = self.clone();
        let url = url.to_string();
        tokio::task::spawn_blocking(move || this.shorten_blocking(&url))
            .await
            .unwrap_or_else(|e| Err(ShortenError::Network(format!("shortener task failed: {e}"))))
    }

    /// Performs the request in the current thread.
    pub fn shorten_blocking(&self, url: &str) -> Result<ShortUrl, ShortenError> {
        parse::check_input(url)?;
        let request_url = self.request_url(url);
        tracing::debug!(provider = %self.provider, request = %request_url, "shortening");

        let mut body: Vec<u8> = Vec::new();
        let mut oversized = false;

        let mut easy = curl::easy::Easy::new();
        easy.url(request_url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                if body.len() + data.len() > MAX_BODY_BYTES {
                    oversized = true;
                    // Short write aborts the transfer.
                    return Ok(0);
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()
        };

        if oversized {
            let status = easy.response_code().unwrap_or(0);
            tracing::warn!(status, "shortener response body too large");
            return Err(ShortenError::api(status, "response body too large"));
        }
        if let Err(e) = performed {
            tracing::warn!(provider = %self.provider, "shortener request failed: {}", e);
            return Err(e.into());
        }

        let status = easy.response_code()?;
        let short_url = parse::interpret_response(status, &body).map_err(|e| {
            tracing::warn!(provider = %self.provider, status, "shortener rejected: {}", e);
            e
        })?;
        tracing::info!(provider = %self.provider, short = %short_url, "shortened");

        Ok(ShortUrl {
            short_url,
            provider: self.provider.clone(),
        })
    }
}
