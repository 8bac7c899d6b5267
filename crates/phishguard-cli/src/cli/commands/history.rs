//! `phishguard history` – list recorded scans.

use anyhow::Result;
use phishguard_core::history::ScanHistory;
use phishguard_core::ScanResult;

use crate::render;

pub fn run_history(history: &ScanHistory, limit: Option<usize>, json: bool) -> Result<()> {
    let records: Vec<&ScanResult> = history
        .recent_window(limit.unwrap_or(history.len()))
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else if records.is_empty() {
        println!("No scans recorded.");
    } else {
        print!("{}", render::history_table(&records));
    }
    Ok(())
}
