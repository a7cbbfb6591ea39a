//! `utmb build <base-url> ...` – build, optionally save and shorten.

use anyhow::Result;
use utmb_core::builder;
use utmb_core::config::UtmbConfig;
use utmb_core::history::{HistoryRepository, NewBuild};

use super::shorten_url;
use crate::cli::BuildArgs;

pub async fn run_build(
    history: &mut HistoryRepository,
    cfg: &UtmbConfig,
    args: &BuildArgs,
) -> Result<()> {
    let request = args.to_request();
    let built = match builder::build(&request) {
        Ok(b) => b,
        Err(e) => anyhow::bail!("{} [{}]", e, e.kind()),
    };

    println!("{}", built.final_url());
    println!(
        "characters: {}  parameters: {}",
        built.character_count(),
        built.parameter_count()
    );

    if args.save {
        let saved = history.add(NewBuild::from_build(&request, &built));
        println!("Saved as {}", saved.id);
    }

    if args.shorten {
        let short = shorten_url(cfg, built.final_url(), args.provider.as_deref()).await?;
        println!("short: {} ({})", short.short_url, short.provider);
    }

    Ok(())
}
