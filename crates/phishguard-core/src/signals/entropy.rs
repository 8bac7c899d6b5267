//! Shannon entropy of a string's character distribution.

use std::collections::HashMap;

/// Shannon entropy of `s` in bits per character: `-Σ p·log₂(p)` over the
/// relative frequency `p` of each distinct character. Empty input yields 0.
pub fn shannon_entropy(s: &str) -> f64 {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut len = 0usize;
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
        len += 1;
    }
    if len == 0 {
        return 0.0;
    }

    let len = len as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_and_uniform_strings() {
        assert!(approx(shannon_entropy(""), 0.0));
        assert!(approx(shannon_entropy("aaaa"), 0.0));
    }

    #[test]
    fn distinct_characters_give_log2_n() {
        assert!(approx(shannon_entropy("ab"), 1.0));
        assert!(approx(shannon_entropy("abcd"), 2.0));
        assert!(approx(shannon_entropy("abcdefgh"), 3.0));
        assert!(approx(
            shannon_entropy("abcdefghijklmnopqrstuvwxyz012345"),
            5.0
        ));
    }

    #[test]
    fn skewed_distribution() {
        // p = 3/4, 1/4
        let expected = -(0.75f64 * 0.75f64.log2() + 0.25 * 0.25f64.log2());
        assert!(approx(shannon_entropy("aaab"), expected));
    }

    #[test]
    fn dyadic_mix_is_exact() {
        // 16 characters at p = 1/32 and 8 at p = 1/16.
        let s = "abdefghijklnpqrstuvwpqrstuvw.com";
        assert_eq!(s.len(), 32);
        assert_eq!(shannon_entropy(s), 4.5);
        assert!(approx(
            shannon_entropy("abdefghijklnpqrstuv.com"),
            23f64.log2()
        ));
    }

    #[test]
    fn ordinary_hostnames_stay_low() {
        assert!(shannon_entropy("google.com") < 3.0);
        assert!(shannon_entropy("accounts.google.com") < 4.5);
    }
}
