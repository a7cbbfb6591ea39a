//! `utmb shorten <url>` – call the configured shortener.

use anyhow::Result;
use utmb_core::config::UtmbConfig;
use utmb_core::shortener::{ShortUrl, Shortener};

/// Shorten `url` with the configured client, optionally switching provider.
pub async fn shorten_url(cfg: &UtmbConfig, url: &str, provider: Option<&str>) -> Result<ShortUrl> {
    let mut client = Shortener::new(&cfg.shortener)?;
    if let Some(p) = provider {
        client = client.with_provider(p)?;
    }
    match client.shorten(url).await {
        Ok(short) => Ok(short),
        Err(e) => anyhow::bail!("{} [{}]", e, e.kind()),
    }
}

pub async fn run_shorten(cfg: &UtmbConfig, url: &str, provider: Option<&str>) -> Result<()> {
    let short = shorten_url(cfg, url, provider).await?;
    println!("{}", short.short_url);
    Ok(())
}
