//! Persist the scan history to disk (JSON under XDG state dir) so it survives across runs.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::lock::HistoryLock;
use super::snapshot::PersistedHistory;
use super::{ScanHistory, HISTORY_CAPACITY};
use crate::scoring::ScanResult;

impl ScanHistory {
    /// Default path for the history file: `~/.local/state/phishguard/history.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("phishguard")?;
        Ok(xdg_dirs.place_state_file("history.json")?)
    }

    /// Write the full bounded log to `path` (creates parent dir if needed).
    ///
    /// The JSON goes to a sibling `.tmp` file that is then renamed over
    /// `path`, so readers see either the old log or the new one.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json =
            serde_json::to_string_pretty(&self.to_snapshot()).context("serialize scan history")?;

        let tmp_path = sibling_with_suffix(path, ".tmp");
        std::fs::write(&tmp_path, json)
            .with_context(|| format!("write scan history: {}", tmp_path.display()))?;
        replace_file(&tmp_path, path)?;
        tracing::debug!(path = %path.display(), records = self.len(), "saved scan history");
        Ok(())
    }

    /// Scan `raw` and record it in the history file at `path`.
    ///
    /// The load, append and save run under a [`HistoryLock`], so concurrent
    /// callers on the same file each keep their record. A file that exists but
    /// cannot be parsed is left untouched and the error returned.
    pub fn scan_and_persist(path: &Path, raw: &str) -> Result<ScanResult> {
        let _lock = HistoryLock::acquire(path)?;
        let mut history = ScanHistory::load_from_path(path)
            .context("refusing to overwrite unreadable scan history")?;
        let result = history.scan_and_record(raw).clone();
        history.save_to_path(path)?;
        Ok(result)
    }

    /// Load the history from `path`. A missing or blank file is an empty
    /// history; unparsable content is an error.
    pub fn load_from_path(path: &Path) -> Result<ScanHistory> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no scan history yet");
                return Ok(ScanHistory::new());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("read scan history: {}", path.display()))
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ScanHistory::new());
        }

        let snapshot: PersistedHistory = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse scan history: {}", path.display()))?;
        if snapshot.records.len() > HISTORY_CAPACITY {
            tracing::warn!(
                records = snapshot.records.len(),
                capacity = HISTORY_CAPACITY,
                "persisted history over capacity, keeping most recent"
            );
        }
        Ok(ScanHistory::from_snapshot(snapshot))
    }
}

pub(super) fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Rename `from` over `to`. Windows refuses to rename onto an existing file,
/// so on failure the target is removed and the rename retried once.
fn replace_file(from: &Path, to: &Path) -> Result<()> {
    let Err(first) = std::fs::rename(from, to) else {
        return Ok(());
    };
    let _ = std::fs::remove_file(to);
    if let Err(second) = std::fs::rename(from, to) {
        let _ = std::fs::remove_file(from);
        anyhow::bail!(
            "rename {} to {}: {second} (first attempt: {first})",
            from.display(),
            to.display()
        );
    }
    Ok(())
}
