//! Plain-text rendering of scan results, history and stats.

use std::fmt::Write;

use phishguard_core::history::{CategoryCounts, HistoryStats};
use phishguard_core::signals::Signal;
use phishguard_core::{Category, ScanResult};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn scan_result(result: &ScanResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "URL:     {}", result.url);
    let _ = writeln!(out, "Score:   {}/100", result.score);
    let _ = writeln!(out, "Verdict: {}", result.category);
    let _ = writeln!(out, "Factors:");
    for factor in &result.factors {
        let weight = if factor.weight > 0 {
            format!("-{}", factor.weight)
        } else {
            String::new()
        };
        let _ = writeln!(out, "  {:>4}  {}", weight, factor.description);
    }
    out
}

pub fn history_table(records: &[&ScanResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<19}  {:>5}  {:<10}  {}", "TIME (UTC)", "SCORE", "VERDICT", "URL");
    for r in records {
        let _ = writeln!(
            out,
            "{:<19}  {:>5}  {:<10}  {}",
            r.timestamp.format(TIME_FORMAT).to_string(),
            r.score,
            r.category,
            r.url
        );
    }
    out
}

fn write_counts(out: &mut String, counts: &CategoryCounts) {
    for category in Category::ALL {
        let label = format!("{category}:");
        let _ = writeln!(out, "  {:<12}{}", label, counts.get(category));
    }
}

pub fn stats_report(stats: &HistoryStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total scans: {}", stats.total_scans());
    write_counts(&mut out, &stats.totals);
    let _ = writeln!(out, "Last {} scans:", stats.recent_window);
    write_counts(&mut out, &stats.recent);
    out
}

pub fn signals_table() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>2}  {:>6}  {}", "#", "WEIGHT", "SIGNAL");
    for (idx, signal) in Signal::ALL.iter().enumerate() {
        let _ = writeln!(out, "{:>2}  {:>6}  {}", idx + 1, signal.weight(), signal);
    }
    out
}
