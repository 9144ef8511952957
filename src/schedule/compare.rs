//! Chronological ordering of Node.js version identifiers
//!
//! Significant version numbers are dotted identifiers with numeric component
//! semantics: "0.8" < "0.12" < "4", which a lexical string sort gets wrong.

use std::cmp::Ordering;

use semver::Version;

/// Parse a version identifier into a semver::Version, normalizing partial
/// versions by padding with zeros.
///
/// Examples:
/// - "4" -> Version(4, 0, 0)
/// - "0.12" -> Version(0, 12, 0)
/// - "4.2.1" -> Version(4, 2, 1)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Total order over version identifiers, ascending chronologically.
///
/// Unparseable identifiers sort after parseable ones; two unparseable
/// identifiers fall back to lexical order so the sort stays total.
pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (parse_version(a), parse_version(b)) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4", Some((4, 0, 0)))]
    #[case("0.12", Some((0, 12, 0)))]
    #[case("4.2.1", Some((4, 2, 1)))]
    #[case("not-a-version", None)]
    fn test_parse_version(#[case] input: &str, #[case] expected: Option<(u64, u64, u64)>) {
        let expected = expected.map(|(major, minor, patch)| Version::new(major, minor, patch));
        assert_eq!(parse_version(input), expected);
    }

    #[rstest]
    #[case("0.8", "0.12", Ordering::Less)] // numeric, not lexical
    #[case("0.12", "4", Ordering::Less)]
    #[case("4", "4", Ordering::Equal)]
    #[case("10", "9", Ordering::Greater)]
    #[case("4", "junk", Ordering::Less)] // parseable before unparseable
    #[case("junk", "also-junk", Ordering::Greater)] // lexical fallback
    fn test_compare_identifiers(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(compare_identifiers(a, b), expected);
    }

    #[test]
    fn sorting_with_compare_identifiers_is_chronological() {
        let mut identifiers = vec!["9", "0.12", "4", "0.8", "10"];
        identifiers.sort_by(|a, b| compare_identifiers(a, b));
        assert_eq!(identifiers, vec!["0.8", "0.12", "4", "9", "10"]);
    }
}
