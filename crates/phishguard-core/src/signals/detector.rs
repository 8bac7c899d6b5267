//! The closed set of risk signals and their weights.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

use crate::url_model::{is_dotted_quad, label_count, NormalizedUrl, Scheme};

use super::entropy::shannon_entropy;
use super::lists::{SENSITIVE_KEYWORDS, SUSPICIOUS_TLDS};
use super::typosquat::find_typosquat_target;
use super::RiskFactor;

/// Raw URLs longer than this many characters are flagged.
pub const MAX_URL_LENGTH: usize = 75;
/// Hostname entropy (bits/char) above which a host looks machine-generated.
pub const ENTROPY_THRESHOLD: f64 = 4.5;
/// Labels beyond the base domain tolerated before flagging.
pub const MAX_EXTRA_LABELS: usize = 3;
/// Hyphens tolerated in the host before flagging.
pub const MAX_HOST_HYPHENS: usize = 3;

/// One heuristic risk signal.
///
/// Weights live here and nowhere else. [`Signal::ALL`] fixes the evaluation
/// order, which is also the order factors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    IpLiteralHost,
    InsecureScheme,
    CredentialMarker,
    Typosquat,
    ExcessiveLength,
    HighHostEntropy,
    SensitiveKeyword,
    ExcessiveSubdomains,
    ExcessiveHyphens,
    SuspiciousTld,
}

impl Signal {
    pub const ALL: [Signal; 10] = [
        Signal::IpLiteralHost,
        Signal::InsecureScheme,
        Signal::CredentialMarker,
        Signal::Typosquat,
        Signal::ExcessiveLength,
        Signal::HighHostEntropy,
        Signal::SensitiveKeyword,
        Signal::ExcessiveSubdomains,
        Signal::ExcessiveHyphens,
        Signal::SuspiciousTld,
    ];

    /// Points subtracted from the score when this signal triggers.
    pub const fn weight(self) -> u32 {
        match self {
            Signal::IpLiteralHost => 35,
            Signal::InsecureScheme => 15,
            Signal::CredentialMarker => 25,
            Signal::Typosquat => 30,
            Signal::ExcessiveLength => 10,
            Signal::HighHostEntropy => 15,
            Signal::SensitiveKeyword => 10,
            Signal::ExcessiveSubdomains => 10,
            Signal::ExcessiveHyphens => 10,
            Signal::SuspiciousTld => 10,
        }
    }

    /// Short human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Signal::IpLiteralHost => "IP-literal host",
            Signal::InsecureScheme => "Insecure scheme",
            Signal::CredentialMarker => "Embedded credential marker",
            Signal::Typosquat => "Typosquat / homoglyph",
            Signal::ExcessiveLength => "Excessive length",
            Signal::HighHostEntropy => "High hostname entropy",
            Signal::SensitiveKeyword => "Sensitive keyword",
            Signal::ExcessiveSubdomains => "Excessive subdomains",
            Signal::ExcessiveHyphens => "Excessive hyphens",
            Signal::SuspiciousTld => "Suspicious top-level domain",
        }
    }

    /// Run this detector. Returns a factor only when the signal triggers.
    pub fn evaluate(self, url: &NormalizedUrl) -> Option<RiskFactor> {
        let description = match self {
            Signal::IpLiteralHost => is_dotted_quad(&url.host)
                .then(|| "IP address used instead of a domain name".to_string()),
            Signal::InsecureScheme => (url.scheme == Scheme::Http)
                .then(|| "Insecure connection (HTTP instead of HTTPS)".to_string()),
            Signal::CredentialMarker => url
                .raw
                .contains('@')
                .then(|| "Contains '@' symbol, which can hide the real destination".to_string()),
            Signal::Typosquat => find_typosquat_target(&url.host)
                .map(|target| format!("Possible typosquatting of '{target}'")),
            Signal::ExcessiveLength => {
                let len = url.raw.chars().count();
                (len > MAX_URL_LENGTH).then(|| format!("Unusually long URL ({len} characters)"))
            }
            Signal::HighHostEntropy => {
                let entropy = shannon_entropy(&url.host);
                (entropy > ENTROPY_THRESHOLD)
                    .then(|| format!("Random-looking hostname (entropy {entropy:.2} bits/char)"))
            }
            Signal::SensitiveKeyword => find_sensitive_keyword(url)
                .map(|keyword| format!("Contains sensitive keyword '{keyword}'")),
            Signal::ExcessiveSubdomains => {
                let extra = label_count(&url.host).saturating_sub(2);
                (extra > MAX_EXTRA_LABELS).then(|| format!("Excessive subdomains ({extra})"))
            }
            Signal::ExcessiveHyphens => {
                let hyphens = url.host.matches('-').count();
                (hyphens > MAX_HOST_HYPHENS)
                    .then(|| format!("Excessive hyphens in domain ({hyphens})"))
            }
            Signal::SuspiciousTld => SUSPICIOUS_TLDS
                .iter()
                .copied()
                .find(|tld| url.host.ends_with(tld))
                .map(|tld| format!("Suspicious top-level domain ({tld})")),
        }?;
        Some(RiskFactor::triggered(self, description))
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// First keyword (in list order) that appears as a whole token of the host or
/// the percent-decoded path, case-insensitively.
///
/// Host tokens are split on `.` and `-`; path tokens on anything that is not
/// alphanumeric. `accounts.example.com` therefore does not match `account`.
fn find_sensitive_keyword(url: &NormalizedUrl) -> Option<&'static str> {
    let host = url.host.to_lowercase();
    let path = percent_decode_str(&url.path)
        .decode_utf8_lossy()
        .to_lowercase();
    let tokens: Vec<&str> = host
        .split(['.', '-'])
        .chain(path.split(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty())
        .collect();
    SENSITIVE_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| tokens.contains(keyword))
}
