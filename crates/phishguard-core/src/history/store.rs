//! In-memory bounded log of scan results.

use std::collections::VecDeque;

use crate::scoring::{scan, ScanResult};

use super::stats::HistoryStats;
use super::HISTORY_CAPACITY;

/// Most-recent-first log of at most [`HISTORY_CAPACITY`] scan results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanHistory {
    pub(super) records: VecDeque<ScanResult>,
}

impl ScanHistory {
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Build a history from records ordered most-recent-first. Anything past
    /// the capacity is dropped.
    pub fn from_records(records: Vec<ScanResult>) -> Self {
        let mut records: VecDeque<ScanResult> = records.into();
        records.truncate(HISTORY_CAPACITY);
        Self { records }
    }

    /// Insert `result` at the head, evicting the oldest record when full.
    pub fn append(&mut self, result: ScanResult) {
        self.records.push_front(result);
        if self.records.len() > HISTORY_CAPACITY {
            if let Some(evicted) = self.records.pop_back() {
                tracing::debug!(url = %evicted.url, "history full, evicted oldest scan");
            }
        }
    }

    /// Scan `raw` and append the result. Returns the newly recorded result.
    pub fn scan_and_record(&mut self, raw: &str) -> &ScanResult {
        self.append(scan(raw));
        &self.records[0]
    }

    /// All records, most recent first.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &ScanResult> + DoubleEndedIterator {
        self.records.iter()
    }

    /// The most recently appended record.
    pub fn head(&self) -> Option<&ScanResult> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `min(n, len)` records, most recent first.
    pub fn recent_window(&self, n: usize) -> impl ExactSizeIterator<Item = &ScanResult> {
        self.records.iter().take(n)
    }

    /// Totals over the whole log plus a breakdown of the `window` most recent
    /// records, in a single pass.
    pub fn stats(&self, window: usize) -> HistoryStats {
        let mut stats = HistoryStats {
            recent_window: window.min(self.records.len()),
            ..HistoryStats::default()
        };
        for (idx, record) in self.records.iter().enumerate() {
            stats.totals.record(record.category);
            if idx < window {
                stats.recent.record(record.category);
            }
        }
        stats
    }
}
