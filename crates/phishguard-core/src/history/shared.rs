//! Thread-safe wrapper around [`ScanHistory`].

use std::sync::{PoisonError, RwLock};

use crate::scoring::{scan, ScanResult};

use super::stats::HistoryStats;
use super::ScanHistory;

/// A [`ScanHistory`] behind a lock so concurrent scans append one at a time.
///
/// Readers see the log either before or after an append, never halfway.
#[derive(Debug, Default)]
pub struct SharedHistory {
    inner: RwLock<ScanHistory>,
}

impl SharedHistory {
    pub fn new(history: ScanHistory) -> Self {
        Self {
            inner: RwLock::new(history),
        }
    }

    /// Append under the write lock.
    pub fn append(&self, result: ScanResult) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .append(result);
    }

    /// Scan `raw` outside the lock, then append the result.
    pub fn scan_and_record(&self, raw: &str) -> ScanResult {
        let result = scan(raw);
        self.append(result.clone());
        result
    }

    /// Consistent copy of the current log.
    pub fn snapshot(&self) -> ScanHistory {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn stats(&self, window: usize) -> HistoryStats {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .stats(window)
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_inner(self) -> ScanHistory {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
