//! Persist history to disk (JSON array under XDG state dir).
//!
//! Reading never fails: anything that is not a well-formed array of records
//! is logged and treated as an empty history.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::ErrorKind;

use super::{SavedBuild, HISTORY_CAPACITY};

/// Default storage key: `~/.local/state/utmb/history.json`.
pub fn default_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("utmb")?;
    Ok(xdg_dirs.get_state_home().join("utmb").join("history.json"))
}

/// Load entries from `path`, most-recent-first, at most `HISTORY_CAPACITY`.
pub(super) fn read_entries(path: &Path) -> Vec<SavedBuild> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no history file yet");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(
                kind = %ErrorKind::PersistenceCorrupt,
                path = %path.display(),
                "could not read history, starting empty: {}",
                e
            );
            return Vec::new();
        }
    };

    let mut entries: Vec<SavedBuild> = match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(
                kind = %ErrorKind::PersistenceCorrupt,
                path = %path.display(),
                "discarding unreadable history: {}",
                e
            );
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    entries.retain(|b| seen.insert(b.id.clone()));
    if entries.len() > HISTORY_CAPACITY {
        tracing::debug!(
            found = entries.len(),
            "history file over capacity, keeping newest {}",
            HISTORY_CAPACITY
        );
        entries.truncate(HISTORY_CAPACITY);
    }
    entries
}

/// Write `entries` to `path` (creates parent dir if needed). Writes a sibling
/// temp file first and renames it over the target.
pub(super) fn write_entries(path: &Path, entries: &[SavedBuild]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(entries).context("serialize history")?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json).with_context(|| format!("write history: {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("replace history: {}", path.display()))?;
    Ok(())
}
