//! Serializable form of the scan history.

use serde::{Deserialize, Serialize};

use crate::scoring::ScanResult;

use super::ScanHistory;

const SNAPSHOT_VERSION: u8 = 1;

fn default_version() -> u8 {
    SNAPSHOT_VERSION
}

/// On-disk layout: the ordered record list, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedHistory {
    #[serde(default = "default_version")]
    pub version: u8,
    #[serde(default)]
    pub records: Vec<ScanResult>,
}

impl ScanHistory {
    /// Build a serializable snapshot of the whole log.
    pub fn to_snapshot(&self) -> PersistedHistory {
        PersistedHistory {
            version: SNAPSHOT_VERSION,
            records: self.records.iter().cloned().collect(),
        }
    }

    /// Restore from a snapshot, keeping at most the capacity's worth of the
    /// most recent records.
    pub fn from_snapshot(snapshot: PersistedHistory) -> Self {
        if snapshot.version != SNAPSHOT_VERSION {
            tracing::warn!(
                version = snapshot.version,
                "unexpected history snapshot version, loading anyway"
            );
        }
        ScanHistory::from_records(snapshot.records)
    }
}
