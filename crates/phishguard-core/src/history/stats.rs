//! Aggregate counts derived from the scan history. Computed on demand.

use serde::Serialize;

use crate::scoring::Category;

/// Number of records per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub safe: usize,
    pub suspicious: usize,
    pub phishing: usize,
    pub invalid: usize,
}

impl CategoryCounts {
    pub(super) fn record(&mut self, category: Category) {
        match category {
            Category::Safe => self.safe += 1,
            Category::Suspicious => self.suspicious += 1,
            Category::Phishing => self.phishing += 1,
            Category::Invalid => self.invalid += 1,
        }
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Safe => self.safe,
            Category::Suspicious => self.suspicious,
            Category::Phishing => self.phishing,
            Category::Invalid => self.invalid,
        }
    }

    pub fn total(&self) -> usize {
        self.safe + self.suspicious + self.phishing + self.invalid
    }
}

/// Summary of the history: overall totals and the recent-window breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HistoryStats {
    pub totals: CategoryCounts,
    /// Number of records the recent breakdown actually covers.
    pub recent_window: usize,
    pub recent: CategoryCounts,
}

impl HistoryStats {
    pub fn total_scans(&self) -> usize {
        self.totals.total()
    }

    pub fn total_safe(&self) -> usize {
        self.totals.safe
    }

    pub fn total_phishing(&self) -> usize {
        self.totals.phishing
    }
}
