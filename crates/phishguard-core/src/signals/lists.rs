//! Fixed data the detectors match against.

/// Keywords that often appear in credential-harvesting URLs.
pub const SENSITIVE_KEYWORDS: &[&str] = &[
    "login", "secure", "account", "verify", "update", "banking", "paypal", "admin", "wallet",
    "confirm",
];

/// Top-level domains with a high share of abusive registrations.
pub const SUSPICIOUS_TLDS: &[&str] = &[
    ".xyz", ".top", ".club", ".info", ".gq", ".tk", ".cn", ".ru",
];

/// Legitimate domains commonly impersonated, in `second-level.tld` form.
pub const REFERENCE_DOMAINS: &[&str] = &[
    "google.com",
    "facebook.com",
    "amazon.com",
    "apple.com",
    "microsoft.com",
    "paypal.com",
    "netflix.com",
    "twitter.com",
    "instagram.com",
    "linkedin.com",
    "github.com",
    "yahoo.com",
    "dropbox.com",
    "chase.com",
    "wellsfargo.com",
    "bankofamerica.com",
];

/// Single-character homoglyph substitutions, matched in both directions.
///
/// Multi-character look-alikes such as `vv` for `w` change the domain length
/// and can never match under same-length comparison, so they are not listed.
pub const HOMOGLYPH_PAIRS: &[(char, char)] = &[
    ('0', 'o'),
    ('1', 'l'),
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
    ('7', 't'),
    ('8', 'b'),
    ('9', 'g'),
    ('i', 'l'),
    ('v', 'u'),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_domains_are_lowercase_two_label() {
        for domain in REFERENCE_DOMAINS {
            assert_eq!(domain.to_lowercase(), *domain);
            assert_eq!(domain.split('.').count(), 2, "{domain}");
        }
    }

    #[test]
    fn tlds_start_with_dot() {
        assert!(SUSPICIOUS_TLDS.iter().all(|t| t.starts_with('.')));
    }
}
