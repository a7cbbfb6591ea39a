use utmb_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unusable.
    if let Err(file_err) = logging::init_logging() {
        if let Err(e) = logging::init_logging_stderr() {
            eprintln!("utmb warning: logging disabled: {:#} ({:#})", file_err, e);
        } else {
            tracing::warn!("file logging unavailable, using stderr: {:#}", file_err);
        }
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("utmb error: {:#}", err);
        std::process::exit(1);
    }
}
