//! `phishguard scan <url>` – score a URL and record the result.

use anyhow::Result;
use phishguard_core::history::ScanHistory;
use phishguard_core::input::check_input;
use phishguard_core::{scan, ScanResult};
use std::path::Path;

use crate::render;

/// Validate and score `raw`. When `history_path` is given, the result is
/// appended to the history there and the whole history written back under
/// the history lock.
pub fn run_scan(raw: &str, history_path: Option<&Path>, json: bool) -> Result<()> {
    let result = scan_and_maybe_record(raw, history_path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::scan_result(&result));
    }
    Ok(())
}

pub(crate) fn scan_and_maybe_record(raw: &str, history_path: Option<&Path>) -> Result<ScanResult> {
    let url = check_input(raw)?;
    let Some(path) = history_path else {
        return Ok(scan(url));
    };

    let result = ScanHistory::scan_and_persist(path, url)?;
    tracing::debug!(url = %result.url, score = result.score, "recorded scan");
    Ok(result)
}
