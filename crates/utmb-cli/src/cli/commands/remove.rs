//! `utmb remove <id>` – remove a saved build.

use anyhow::Result;
use utmb_core::history::HistoryRepository;

pub fn run_remove(history: &mut HistoryRepository, id: &str) -> Result<()> {
    if history.remove(id) {
        println!("Removed build {id}");
    } else {
        println!("No saved build with id {id}");
    }
    Ok(())
}
