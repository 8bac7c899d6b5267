//! CLI for the PhishGuard URL scanner.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use phishguard_core::config::{self, PhishguardConfig};
use phishguard_core::history::ScanHistory;
use std::path::{Path, PathBuf};

use commands::{run_completions, run_history, run_scan, run_signals, run_stats};

/// Top-level CLI for PhishGuard.
#[derive(Debug, Parser)]
#[command(name = "phishguard")]
#[command(about = "PhishGuard: heuristic phishing URL scanner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Score a URL and record the result.
    Scan {
        /// URL to check (scheme optional).
        url: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
        /// Do not append this scan to the history.
        #[arg(long)]
        no_record: bool,
    },

    /// List recorded scans, most recent first.
    History {
        /// Show at most N scans.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
        /// Print the records as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show totals and the verdict mix of recent scans.
    Stats {
        /// Number of recent scans to break down (default from config).
        #[arg(long, value_name = "N")]
        window: Option<usize>,
        /// Print the stats as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the risk signals in evaluation order with their weights.
    Signals,

    /// Print shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Scan {
                url,
                json,
                no_record,
            } => {
                let path = (cfg.record_history && !no_record)
                    .then(|| history_path(&cfg))
                    .transpose()?;
                run_scan(&url, path.as_deref(), json)?;
            }
            CliCommand::History { limit, json } => {
                let history = load_history(&history_path(&cfg)?);
                run_history(&history, limit, json)?;
            }
            CliCommand::Stats { window, json } => {
                let history = load_history(&history_path(&cfg)?);
                run_stats(&history, window.unwrap_or(cfg.recent_window), json)?;
            }
            CliCommand::Signals => run_signals(),
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

/// History file from config, or the XDG default.
fn history_path(cfg: &PhishguardConfig) -> Result<PathBuf> {
    match &cfg.history_path {
        Some(path) => Ok(path.clone()),
        None => ScanHistory::default_path(),
    }
}

/// Load the history for display, starting empty if the file cannot be read or
/// parsed. Only read-only commands use this; `scan` refuses to write over an
/// unreadable file.
fn load_history(path: &Path) -> ScanHistory {
    match ScanHistory::load_from_path(path) {
        Ok(history) => {
            tracing::debug!(records = history.len(), "loaded scan history");
            history
        }
        Err(err) => {
            tracing::warn!("could not load scan history, starting empty: {:#}", err);
            ScanHistory::new()
        }
    }
}

#[cfg(test)]
mod tests;
