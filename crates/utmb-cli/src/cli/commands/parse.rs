//! `utmb parse <url>` – split a URL into base, UTM fields, and parameters.

use anyhow::Result;
use utmb_core::request::UrlBuildRequest;

pub fn run_parse(url: &str) -> Result<()> {
    let request = match UrlBuildRequest::from_url(url) {
        Ok(r) => r,
        Err(e) => anyhow::bail!("{} [{}]", e, e.kind()),
    };

    println!("base:     {}", request.base_url);
    for (field, value) in request.utm.iter_emitted() {
        println!("{:<9} {}", format!("{}:", field.short_name()), value);
    }
    for p in &request.custom_params {
        println!("param:    {}={}", p.key, p.value);
    }
    Ok(())
}
