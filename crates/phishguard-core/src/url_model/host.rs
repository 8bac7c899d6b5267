//! Hostname helpers shared by the detectors.

/// The last two `.`-separated labels of `host` (e.g. `google.com` for
/// `mail.google.com`). Hosts with fewer labels are returned unchanged.
pub fn base_domain(host: &str) -> &str {
    let mut dots = host.rmatch_indices('.');
    let _last = dots.next();
    match dots.next() {
        Some((idx, _)) => &host[idx + 1..],
        None => host,
    }
}

/// Number of `.`-separated labels in `host` (empty labels included).
pub fn label_count(host: &str) -> usize {
    host.split('.').count()
}

/// True if `host` looks like a dotted-quad IPv4 literal: four groups of one
/// to three ASCII digits.
pub fn is_dotted_quad(host: &str) -> bool {
    let mut groups = 0;
    for part in host.split('.') {
        groups += 1;
        if groups > 4 || part.is_empty() || part.len() > 3 {
            return false;
        }
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    groups == 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_domain_takes_last_two_labels() {
        assert_eq!(base_domain("mail.google.com"), "google.com");
        assert_eq!(base_domain("a.b.c.example.org"), "example.org");
        assert_eq!(base_domain("google.com"), "google.com");
        assert_eq!(base_domain("localhost"), "localhost");
        assert_eq!(base_domain("192.168.0.10"), "0.10");
    }

    #[test]
    fn label_count_counts_all_labels() {
        assert_eq!(label_count("example.com"), 2);
        assert_eq!(label_count("a.b.c.d.e.f.com"), 7);
        assert_eq!(label_count("localhost"), 1);
    }

    #[test]
    fn dotted_quad_detection() {
        assert!(is_dotted_quad("192.168.0.10"));
        assert!(is_dotted_quad("8.8.8.8"));
        assert!(!is_dotted_quad("1.2.3"));
        assert!(!is_dotted_quad("1.2.3.4.5"));
        assert!(!is_dotted_quad("1.2.3.x"));
        assert!(!is_dotted_quad("1234.1.1.1"));
        assert!(!is_dotted_quad("google.com"));
        assert!(!is_dotted_quad("1..2.3"));
    }
}
