//! Heuristic risk signals.
//!
//! Each [`Signal`] is a pure detector over a [`NormalizedUrl`]. All of them run
//! on every scan, in [`Signal::ALL`] order, independently of each other.

mod detector;
mod entropy;
pub mod lists;
mod typosquat;

use serde::{Deserialize, Serialize};

use crate::url_model::NormalizedUrl;

pub use detector::{
    Signal, ENTROPY_THRESHOLD, MAX_EXTRA_LABELS, MAX_HOST_HYPHENS, MAX_URL_LENGTH,
};
pub use entropy::shannon_entropy;
pub use typosquat::{find_typosquat_target, homoglyph_mismatches, is_homoglyph_pair};

/// A weighted reason a URL was considered risky.
///
/// Factors produced by a detector carry their [`Signal`] and a positive
/// weight. Informational notes attached by the aggregator have no signal and
/// zero weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<Signal>,
    pub weight: u32,
    pub description: String,
}

impl RiskFactor {
    pub(crate) fn triggered(signal: Signal, description: String) -> Self {
        Self {
            signal: Some(signal),
            weight: signal.weight(),
            description,
        }
    }

    /// A zero-weight note that does not affect the score.
    pub fn informational(description: impl Into<String>) -> Self {
        Self {
            signal: None,
            weight: 0,
            description: description.into(),
        }
    }
}

/// Run every detector against `url` and collect the factors that triggered,
/// in detection order.
pub fn evaluate_all(url: &NormalizedUrl) -> Vec<RiskFactor> {
    Signal::ALL
        .iter()
        .filter_map(|signal| {
            let factor = signal.evaluate(url)?;
            tracing::debug!(
                host = %url.host,
                signal = %signal,
                weight = factor.weight,
                "signal triggered"
            );
            Some(factor)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_model::normalize;

    fn signals_for(raw: &str) -> Vec<Signal> {
        let url = normalize(raw).unwrap();
        evaluate_all(&url)
            .into_iter()
            .filter_map(|f| f.signal)
            .collect()
    }

    #[test]
    fn clean_https_url_triggers_nothing() {
        assert!(signals_for("https://google.com").is_empty());
    }

    #[test]
    fn factors_follow_canonical_order() {
        assert_eq!(
            signals_for("http://192.168.0.10/account"),
            vec![
                Signal::IpLiteralHost,
                Signal::InsecureScheme,
                Signal::SensitiveKeyword
            ]
        );
        assert_eq!(
            signals_for("http://paypa1.com/login"),
            vec![
                Signal::InsecureScheme,
                Signal::Typosquat,
                Signal::SensitiveKeyword
            ]
        );
    }

    #[test]
    fn informational_factor_has_no_weight() {
        let f = RiskFactor::informational("note");
        assert_eq!(f.weight, 0);
        assert!(f.signal.is_none());
    }

    #[test]
    fn factor_json_omits_missing_signal() {
        let json = serde_json::to_string(&RiskFactor::informational("note")).unwrap();
        assert_eq!(json, r#"{"weight":0,"description":"note"}"#);
        let parsed: RiskFactor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, RiskFactor::informational("note"));
    }
}
