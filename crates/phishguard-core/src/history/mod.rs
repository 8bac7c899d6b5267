//! Bounded scan history.
//!
//! Completed scans are kept most-recent-first in a log capped at
//! [`HISTORY_CAPACITY`] records; appending to a full log evicts the oldest
//! record. Records are never edited or removed individually.
//!
//! The history is an explicit value owned by the caller. [`SharedHistory`]
//! wraps one for callers that scan from several threads, and the persistence
//! helpers write the whole log as JSON under the XDG state dir after each
//! append. Separate processes sharing one file take a [`HistoryLock`] for the
//! load, append and save so neither loses the other's record.

mod lock;
mod persist;
mod shared;
mod snapshot;
mod stats;
mod store;

pub use lock::HistoryLock;
pub use shared::SharedHistory;
pub use snapshot::PersistedHistory;
pub use stats::{CategoryCounts, HistoryStats};
pub use store::ScanHistory;

/// Maximum number of records kept.
pub const HISTORY_CAPACITY: usize = 50;
