//! PhishGuard core: heuristic URL trust scoring.
//!
//! A raw URL string is normalized ([`url_model`]), run through every risk
//! detector ([`signals`]), and aggregated into a score and category
//! ([`scoring`]). Completed results can be appended to a bounded
//! [`history::ScanHistory`] for later reporting.

pub mod config;
pub mod history;
pub mod input;
pub mod logging;
pub mod scoring;
pub mod signals;
pub mod url_model;

pub use scoring::{scan, scan_at, Category, ScanResult};
