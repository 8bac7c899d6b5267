//! Cross-process lock on a history file.
//!
//! The lock is a sibling `<file>.lock` created with `create_new`, so only one
//! holder exists at a time. It is removed when the guard drops. A lock file
//! older than [`STALE_AFTER`] is assumed to belong to a crashed process and is
//! taken over.

use anyhow::{bail, Context, Result};
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use super::persist::sibling_with_suffix;

/// How long [`HistoryLock::acquire`] keeps retrying before giving up.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
/// Age after which an existing lock file is considered abandoned.
pub const STALE_AFTER: Duration = Duration::from_secs(30);
const RETRY_INTERVAL: Duration = Duration::from_millis(5);

/// Exclusive hold on a history file, released on drop.
#[derive(Debug)]
pub struct HistoryLock {
    lock_path: PathBuf,
}

impl HistoryLock {
    /// Block until the lock for `history_path` is held, or fail after
    /// [`ACQUIRE_TIMEOUT`].
    pub fn acquire(history_path: &Path) -> Result<HistoryLock> {
        Self::acquire_within(history_path, ACQUIRE_TIMEOUT)
    }

    pub fn acquire_within(history_path: &Path, timeout: Duration) -> Result<HistoryLock> {
        let lock_path = sibling_with_suffix(history_path, ".lock");
        if let Some(parent) = lock_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }

        let deadline = Instant::now() + timeout;
        loop {
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&lock_path)
            {
                Ok(_) => {
                    tracing::trace!(path = %lock_path.display(), "history lock acquired");
                    return Ok(HistoryLock { lock_path });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    if is_stale(&lock_path) {
                        tracing::warn!(path = %lock_path.display(), "removing stale history lock");
                        let _ = std::fs::remove_file(&lock_path);
                        continue;
                    }
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("create lock: {}", lock_path.display()))
                }
            }
            if Instant::now() >= deadline {
                bail!(
                    "timed out waiting for history lock {} (remove it if no other phishguard is running)",
                    lock_path.display()
                );
            }
            std::thread::sleep(RETRY_INTERVAL);
        }
    }

    pub fn path(&self) -> &Path {
        &self.lock_path
    }
}

impl Drop for HistoryLock {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.lock_path) {
            tracing::warn!(path = %self.lock_path.display(), "could not release history lock: {e}");
        }
    }
}

fn is_stale(lock_path: &Path) -> bool {
    std::fs::metadata(lock_path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .is_some_and(|age| age > STALE_AFTER)
}
