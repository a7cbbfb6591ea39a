//! Bounded, most-recent-first history of saved builds.
//!
//! The repository is the only owner of the collection and of its file on
//! disk. It is created once per process (`load` / `load_default` /
//! `in_memory`) and handed by reference to whatever needs it. Every `add`,
//! `remove`, and `clear` updates memory first and then rewrites the file; a
//! failed write is logged and the in-memory state stays authoritative for the
//! rest of the session.

mod entry;
mod filter;
mod persist;

pub use entry::{NewBuild, SavedBuild};
pub use persist::default_path;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum number of saved builds kept.
pub const HISTORY_CAPACITY: usize = 5;

#[derive(Debug)]
pub struct HistoryRepository {
    entries: Vec<SavedBuild>,
    path: Option<PathBuf>,
    last_created_at: i64,
    next_seq: u64,
}

impl HistoryRepository {
    /// Repository with no durable storage.
    pub fn in_memory() -> Self {
        Self {
            entries: Vec::new(),
            path: None,
            last_created_at: 0,
            next_seq: 0,
        }
    }

    /// Load history from `path`. Missing or unreadable files yield an empty
    /// history; this never fails.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = persist::read_entries(&path);
        let last_created_at = entries.iter().map(|b| b.created_at).max().unwrap_or(0);
        tracing::debug!(path = %path.display(), entries = entries.len(), "history loaded");
        Self {
            entries,
            path: Some(path),
            last_created_at,
            next_seq: 0,
        }
    }

    /// Load from `override_path` if given, else from [`default_path`].
    pub fn load_default(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(p) => p.to_path_buf(),
            None => default_path()?,
        };
        Ok(Self::load(path))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Assigns an id and timestamp, prepends, and evicts the oldest entry if
    /// the history is over capacity. Returns the stored record.
    pub fn add(&mut self, build: NewBuild) -> &SavedBuild {
        let created_at = self.next_timestamp();
        let id = self.next_id(created_at);
        let saved = build.into_saved(id, created_at);
        tracing::info!(id = %saved.id, url = %saved.final_url, "saved build");

        self.entries.insert(0, saved);
        if self.entries.len() > HISTORY_CAPACITY {
            let evicted = self.entries.split_off(HISTORY_CAPACITY);
            for old in &evicted {
                tracing::debug!(id = %old.id, "evicted from history");
            }
        }
        self.persist();
        &self.entries[0]
    }

    /// Removes the entry with `id`. Returns false (and writes nothing) if absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|b| b.id != id);
        if self.entries.len() == before {
            tracing::debug!(id, "remove: no such entry");
            return false;
        }
        tracing::info!(id, "removed build");
        self.persist();
        true
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        tracing::info!("history cleared");
        self.persist();
    }

    /// All entries, most-recent-first.
    pub fn list(&self) -> &[SavedBuild] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&SavedBuild> {
        self.entries.iter().find(|b| b.id == id)
    }

    /// Entries whose URL, UTM values, or custom keys/values contain `term`,
    /// case-insensitively. Computed fresh on every call.
    pub fn filter(&self, term: &str) -> Vec<&SavedBuild> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|b| filter::matches(b, &needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the current collection to durable storage. No-op for in-memory
    /// repositories.
    pub fn flush(&self) -> Result<()> {
        match &self.path {
            Some(path) => persist::write_entries(path, &self.entries),
            None => Ok(()),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            tracing::warn!("history not persisted, changes will be lost on reload: {:#}", e);
        }
    }

    /// `"<created_at>-<seq>"`, skipping any id already held (loaded records
    /// may carry ids this repository did not generate).
    fn next_id(&mut self, created_at: i64) -> String {
        loop {
            let id = format!("{}-{}", created_at, self.next_seq);
            self.next_seq += 1;
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Strictly increasing Unix-millisecond timestamp, so creation order is
    /// preserved even if the wall clock stalls or steps back.
    fn next_timestamp(&mut self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default();
        let ts = now.max(self.last_created_at + 1);
        self.last_created_at = ts;
        ts
    }
}
