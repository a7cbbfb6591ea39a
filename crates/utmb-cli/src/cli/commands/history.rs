//! `utmb history [--filter TERM]` – list saved builds.

use anyhow::Result;
use std::time::{SystemTime, UNIX_EPOCH};
use utmb_core::history::{HistoryRepository, SavedBuild};

/// Human-readable age of a Unix-millisecond timestamp relative to `now_ms`.
pub(crate) fn format_age(created_at_ms: i64, now_ms: i64) -> String {
    let secs = (now_ms - created_at_ms).max(0) / 1000;
    match secs {
        0..=59 => format!("{secs}s ago"),
        60..=3599 => format!("{}m ago", secs / 60),
        3600..=86_399 => format!("{}h ago", secs / 3600),
        _ => format!("{}d ago", secs / 86_400),
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

pub fn run_history(history: &HistoryRepository, filter: Option<&str>) -> Result<()> {
    let builds: Vec<&SavedBuild> = match filter {
        Some(term) => history.filter(term),
        None => history.list().iter().collect(),
    };

    if builds.is_empty() {
        match filter {
            Some(term) => println!("No saved builds match `{term}`."),
            None => println!("No saved builds."),
        }
        return Ok(());
    }

    let now = now_ms();
    println!("{:<15} {:<10} {}", "ID", "CREATED", "URL");
    for b in builds {
        println!(
            "{:<15} {:<10} {}",
            b.id,
            format_age(b.created_at, now),
            b.final_url
        );
    }
    Ok(())
}
