//! StatusStore — flat-file JSON persistence of last known site statuses.
//!
//! The store holds one entry per site url. It is loaded once at cycle
//! start, mutated in memory while the cycle runs, and flushed back exactly
//! once at cycle end, overwriting the previous file in full.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{StateError, StateResult};
use crate::types::Status;

/// Convert any `Display` error into a `StateError` variant via a closure factory.
macro_rules! map_err {
    ($variant:ident) => {
        |e| StateError::$variant(e.to_string())
    };
}

/// Last known status per site url, with optional file backing.
#[derive(Debug)]
pub struct StatusStore {
    /// Backing file; `None` for in-memory stores.
    path: Option<PathBuf>,
    /// Sorted keys keep re-serialization byte-stable across runs.
    entries: BTreeMap<String, Status>,
}

impl StatusStore {
    /// Load the store from `path`.
    ///
    /// Never fails: a missing or empty file is a normal first run, and a
    /// damaged file degrades to an empty baseline with a warning — the
    /// next save rewrites it in full.
    pub fn load(path: &Path) -> Self {
        let entries = match read_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "status file unreadable, starting from an empty baseline"
                );
                BTreeMap::new()
            }
        };
        debug!(path = %path.display(), entries = entries.len(), "status store loaded");
        Self {
            path: Some(path.to_path_buf()),
            entries,
        }
    }

    /// Create an ephemeral store with no file backing (for testing).
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: BTreeMap::new(),
        }
    }

    /// Last known status for a url; `None` when the site has no baseline.
    pub fn get(&self, url: &str) -> Option<Status> {
        self.entries.get(url).copied()
    }

    /// Record the latest status for a url, replacing any previous entry.
    pub fn set(&mut self, url: impl Into<String>, status: Status) {
        self.entries.insert(url.into(), status);
    }

    /// Number of tracked sites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store tracks no sites at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persist the full mapping, replacing the file atomically.
    ///
    /// The document is written to a sibling temporary file and renamed
    /// over the target, so a concurrent reader observes either the old or
    /// the new complete content, never a partial write. In-memory stores
    /// have nothing to persist and return `Ok`.
    pub fn save(&self) -> StateResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.entries).map_err(map_err!(Serialize))?;
        let tmp = tmp_path(path);
        fs::write(&tmp, json).map_err(map_err!(Write))?;
        fs::rename(&tmp, path).map_err(map_err!(Write))?;
        debug!(path = %path.display(), entries = self.entries.len(), "status store saved");
        Ok(())
    }
}

/// Read and parse the persisted mapping. A missing or blank file reads as
/// empty; only I/O and parse failures surface as errors.
fn read_entries(path: &Path) -> StateResult<BTreeMap<String, Status>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(path).map_err(map_err!(Read))?;
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_json::from_str(&content).map_err(map_err!(Parse))
}

/// Sibling temporary path, same directory so the rename never crosses a
/// filesystem boundary.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "status".into());
    name.push(".tmp");
    path.with_file_name(name)
}
