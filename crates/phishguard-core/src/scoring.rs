//! Risk aggregation and classification.
//!
//! A scan starts at [`MAX_SCORE`] and loses each triggered factor's weight,
//! saturating at zero. The resulting score maps to a [`Category`]:
//!
//! | score      | category   |
//! |------------|------------|
//! | 80..=100   | Safe       |
//! | 50..=79    | Suspicious |
//! | 0..=49     | Phishing   |
//!
//! URLs that fail normalization are `Invalid` with a score of 0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::signals::{evaluate_all, RiskFactor};
use crate::url_model::normalize;

pub const MAX_SCORE: u8 = 100;
/// Lowest score still classified as [`Category::Safe`].
pub const SAFE_THRESHOLD: u8 = 80;
/// Lowest score still classified as [`Category::Suspicious`].
pub const SUSPICIOUS_THRESHOLD: u8 = 50;

pub const NO_THREATS_DESCRIPTION: &str = "No obvious threats detected";
pub const INVALID_URL_DESCRIPTION: &str = "Invalid URL Format";

/// Risk category of a completed scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Safe,
    Suspicious,
    Phishing,
    Invalid,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Safe,
        Category::Suspicious,
        Category::Phishing,
        Category::Invalid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Safe => "Safe",
            Category::Suspicious => "Suspicious",
            Category::Phishing => "Phishing",
            Category::Invalid => "Invalid",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Map a score to its category. Boundaries are inclusive from below.
pub fn classify(score: u8) -> Category {
    if score >= SAFE_THRESHOLD {
        Category::Safe
    } else if score >= SUSPICIOUS_THRESHOLD {
        Category::Suspicious
    } else {
        Category::Phishing
    }
}

/// `MAX_SCORE` minus the summed weights, saturating at 0.
pub fn aggregate(factors: &[RiskFactor]) -> u8 {
    let total: u32 = factors.iter().map(|f| f.weight).sum();
    // Never exceeds MAX_SCORE, so the narrowing is lossless.
    u32::from(MAX_SCORE).saturating_sub(total) as u8
}

/// Outcome of one scan. Created once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// The raw input string.
    pub url: String,
    pub score: u8,
    pub category: Category,
    /// Factors in detection order.
    pub factors: Vec<RiskFactor>,
    pub timestamp: DateTime<Utc>,
}

impl ScanResult {
    fn invalid(url: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            url: url.to_string(),
            score: 0,
            category: Category::Invalid,
            factors: vec![RiskFactor::informational(INVALID_URL_DESCRIPTION)],
            timestamp,
        }
    }

    pub fn factor_descriptions(&self) -> impl Iterator<Item = &str> {
        self.factors.iter().map(|f| f.description.as_str())
    }
}

/// Score `raw` now. See [`scan_at`].
pub fn scan(raw: &str) -> ScanResult {
    scan_at(raw, Utc::now())
}

/// Score `raw` and stamp the result with `timestamp`.
///
/// `raw` should already have passed [`check_input`](crate::input::check_input).
/// Never fails: a URL that cannot be normalized yields an
/// [`Category::Invalid`] result.
pub fn scan_at(raw: &str, timestamp: DateTime<Utc>) -> ScanResult {
    let url = match normalize(raw) {
        Ok(url) => url,
        Err(e) => {
            tracing::info!(url = raw, error = %e, "scan rejected: invalid URL");
            return ScanResult::invalid(raw, timestamp);
        }
    };

    let mut factors = evaluate_all(&url);
    let score = aggregate(&factors);
    let category = classify(score);
    if category == Category::Safe && factors.is_empty() {
        factors.push(RiskFactor::informational(NO_THREATS_DESCRIPTION));
    }

    tracing::info!(
        url = raw,
        score,
        category = %category,
        factors = factors.len(),
        "scan complete"
    );

    ScanResult {
        url: raw.to_string(),
        score,
        category,
        factors,
        timestamp,
    }
}
