//! CLI command handlers. Each command is in its own file.

mod completions;
mod history;
mod scan;
mod signals;
mod stats;

pub use completions::run_completions;
pub use history::run_history;
pub use scan::run_scan;
pub use signals::run_signals;
pub use stats::run_stats;
