//! CLI command handlers. Each command is in its own file.

mod build;
mod clear;
mod history;
mod parse;
mod remove;
mod shorten;
mod show;

pub use build::run_build;
pub use clear::run_clear;
pub use history::run_history;
pub use parse::run_parse;
pub use remove::run_remove;
pub use shorten::{run_shorten, shorten_url};
pub use show::run_show;
