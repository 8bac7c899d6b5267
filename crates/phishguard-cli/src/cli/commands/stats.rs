//! `phishguard stats` – totals and recent verdict mix.

use anyhow::Result;
use phishguard_core::history::ScanHistory;

use crate::render;

pub fn run_stats(history: &ScanHistory, window: usize, json: bool) -> Result<()> {
    let stats = history.stats(window);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", render::stats_report(&stats));
    }
    Ok(())
}
