//! `utmb clear` – remove every saved build.

use anyhow::Result;
use utmb_core::history::HistoryRepository;

pub fn run_clear(history: &mut HistoryRepository) -> Result<()> {
    let n = history.len();
    history.clear();
    println!("Removed {n} saved build(s)");
    Ok(())
}
