//! CLI for the UTMB campaign URL builder.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use utmb_core::config;
use utmb_core::history::HistoryRepository;
use utmb_core::request::{QueryParameter, UrlBuildRequest, UtmField};

use commands::{
    run_build, run_clear, run_history, run_parse, run_remove, run_shorten, run_show,
};

/// Top-level CLI for the UTMB campaign URL builder.
#[derive(Debug, Parser)]
#[command(name = "utmb")]
#[command(about = "UTMB: build campaign-tagged URLs and keep a short history", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build a URL from a base address, UTM fields, and custom parameters.
    Build(BuildArgs),

    /// List saved builds, most recent first.
    History {
        /// Only show builds whose URL, UTM values, or parameters contain TERM (case-insensitive).
        #[arg(long, short, value_name = "TERM")]
        filter: Option<String>,
    },

    /// Show one saved build in detail.
    Show {
        /// Build identifier (from `utmb history`).
        id: String,
    },

    /// Remove a saved build by ID.
    Remove {
        /// Build identifier.
        id: String,
    },

    /// Remove all saved builds.
    Clear,

    /// Shorten an http/https URL via the configured shortener.
    Shorten {
        url: String,

        /// Shortener provider to use instead of the configured one.
        #[arg(long, value_name = "NAME")]
        provider: Option<String>,
    },

    /// Split an existing URL into its UTM fields and custom parameters.
    Parse { url: String },
}

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Absolute http/https base URL. Any query it carries is replaced.
    pub base_url: String,

    /// utm_source (e.g. google, newsletter).
    #[arg(long)]
    pub source: Option<String>,
    /// utm_medium (e.g. cpc, email).
    #[arg(long)]
    pub medium: Option<String>,
    /// utm_campaign.
    #[arg(long)]
    pub campaign: Option<String>,
    /// utm_term.
    #[arg(long)]
    pub term: Option<String>,
    /// utm_content.
    #[arg(long)]
    pub content: Option<String>,

    /// Extra query parameter; repeat for more. Order is kept.
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<QueryParameter>,

    /// Save the result to history.
    #[arg(long)]
    pub save: bool,

    /// Also shorten the result.
    #[arg(long)]
    pub shorten: bool,

    /// Shortener provider to use instead of the configured one.
    #[arg(long, value_name = "NAME", requires = "shorten")]
    pub provider: Option<String>,
}

impl BuildArgs {
    pub fn to_request(&self) -> UrlBuildRequest {
        let mut request = UrlBuildRequest::new(self.base_url.clone());
        let fields = [
            (UtmField::Source, &self.source),
            (UtmField::Medium, &self.medium),
            (UtmField::Campaign, &self.campaign),
            (UtmField::Term, &self.term),
            (UtmField::Content, &self.content),
        ];
        for (field, value) in fields {
            if let Some(v) = value {
                request.utm.set(field, v);
            }
        }
        request.custom_params = self.params.clone();
        request
    }
}

/// Parses `KEY=VALUE`; the value may be empty or contain further `=`.
fn parse_param(raw: &str) -> Result<QueryParameter, String> {
    match raw.split_once('=') {
        Some((key, value)) => Ok(QueryParameter::new(key, value)),
        None => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let mut history = HistoryRepository::load_default(cfg.history_path.as_deref())?;

        match cli.command {
            CliCommand::Build(args) => run_build(&mut history, &cfg, &args).await?,
            CliCommand::History { filter } => run_history(&history, filter.as_deref())?,
            CliCommand::Show { id } => run_show(&history, &id)?,
            CliCommand::Remove { id } => run_remove(&mut history, &id)?,
            CliCommand::Clear => run_clear(&mut history)?,
            CliCommand::Shorten { url, provider } => {
                run_shorten(&cfg, &url, provider.as_deref()).await?
            }
            CliCommand::Parse { url } => run_parse(&url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
