//! Same-length typosquat / homoglyph matching against reference domains.
//!
//! Only equal-length comparisons are made, so look-alikes built by inserting
//! or dropping characters (`gooogle.com`, `gogle.com`) are not detected.

use crate::url_model::base_domain;

use super::lists::{HOMOGLYPH_PAIRS, REFERENCE_DOMAINS};

/// Positions that may differ (outside homoglyph pairs) and still count as a near miss.
const MAX_MISMATCHES: usize = 1;

/// True if `a` and `b` are registered homoglyph substitutes of each other.
pub fn is_homoglyph_pair(a: char, b: char) -> bool {
    HOMOGLYPH_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Count positions where `candidate` and `reference` differ and the two
/// characters are not homoglyphs of each other. Returns `None` when the
/// strings differ in length.
pub fn homoglyph_mismatches(candidate: &str, reference: &str) -> Option<usize> {
    if candidate.chars().count() != reference.chars().count() {
        return None;
    }
    let mismatches = candidate
        .chars()
        .zip(reference.chars())
        .filter(|&(a, b)| a != b && !is_homoglyph_pair(a, b))
        .count();
    Some(mismatches)
}

/// Find the reference domain that `host` appears to impersonate.
///
/// The last two labels of `host` are compared with every reference domain of
/// the same length. A near miss against a reference that the full host
/// contains verbatim (a real subdomain) is retracted and scanning continues.
/// Returns the first confirmed target.
pub fn find_typosquat_target(host: &str) -> Option<&'static str> {
    let base = base_domain(host);
    for &reference in REFERENCE_DOMAINS {
        if base == reference {
            continue;
        }
        match homoglyph_mismatches(base, reference) {
            Some(n) if n <= MAX_MISMATCHES => {}
            _ => continue,
        }
        if host.contains(reference) {
            tracing::trace!(host, reference, "typosquat match retracted: host contains reference");
            continue;
        }
        return Some(reference);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homoglyph_pairs_are_bidirectional() {
        assert!(is_homoglyph_pair('0', 'o'));
        assert!(is_homoglyph_pair('o', '0'));
        assert!(is_homoglyph_pair('l', '1'));
        assert!(is_homoglyph_pair('i', 'l'));
        assert!(!is_homoglyph_pair('a', 'b'));
        assert!(!is_homoglyph_pair('1', 'i'));
    }

    #[test]
    fn mismatch_count_ignores_homoglyphs() {
        assert_eq!(homoglyph_mismatches("paypa1.com", "paypal.com"), Some(0));
        assert_eq!(homoglyph_mismatches("g00gle.com", "google.com"), Some(0));
        assert_eq!(homoglyph_mismatches("gooqle.com", "google.com"), Some(1));
        assert_eq!(homoglyph_mismatches("github.com", "google.com"), Some(5));
        assert_eq!(homoglyph_mismatches("gogle.com", "google.com"), None);
    }

    #[test]
    fn detects_digit_homoglyph() {
        assert_eq!(find_typosquat_target("paypa1.com"), Some("paypal.com"));
        assert_eq!(find_typosquat_target("www.g00gle.com"), Some("google.com"));
        assert_eq!(find_typosquat_target("app1e.com"), Some("apple.com"));
    }

    #[test]
    fn detects_single_substitution() {
        assert_eq!(find_typosquat_target("amazan.com"), Some("amazon.com"));
        assert_eq!(find_typosquat_target("login.netflex.com"), Some("netflix.com"));
    }

    #[test]
    fn exact_reference_and_subdomains_are_not_flagged() {
        assert_eq!(find_typosquat_target("google.com"), None);
        assert_eq!(find_typosquat_target("mail.google.com"), None);
        assert_eq!(find_typosquat_target("accounts.google.com"), None);
        assert_eq!(find_typosquat_target("www.paypal.com"), None);
    }

    #[test]
    fn near_miss_is_retracted_when_host_contains_reference() {
        // Base `gooqle.com` is one substitution away from `google.com`, but
        // the full host contains `google.com` verbatim.
        assert_eq!(find_typosquat_target("google.com.gooqle.com"), None);
    }

    #[test]
    fn insertions_and_deletions_are_out_of_scope() {
        assert_eq!(find_typosquat_target("gooogle.com"), None);
        assert_eq!(find_typosquat_target("gogle.com"), None);
        assert_eq!(find_typosquat_target("paypall.com"), None);
    }

    #[test]
    fn unrelated_domains_are_not_flagged() {
        assert_eq!(find_typosquat_target("example.org"), None);
        assert_eq!(find_typosquat_target("rust-lang.org"), None);
        assert_eq!(find_typosquat_target("192.168.0.10"), None);
    }
}
