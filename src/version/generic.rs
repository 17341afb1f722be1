//! Generic version comparison
//!
//! Versions are dot-separated segments with an optional `v` prefix:
//! - v1.2.3 and 1.2.3 are equal
//! - 1.10 is greater than 1.9 (numeric segments compare by value)
//! - 1.0 is less than 1.0.0 (a missing segment ranks lowest)

use std::cmp::Ordering;

use crate::version::comparator::{Policy, VersionComparator, ordering_to_int};
use crate::version::segment::compare_sequences;
use crate::version::tokenizer::tokenize;

pub struct GenericComparator;

impl VersionComparator for GenericComparator {
    fn policy(&self) -> Policy {
        Policy::Generic
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        compare_generic(a, b)
    }
}

/// Order two versions segment by segment.
///
/// Build metadata and pre-release suffixes get no special treatment here.
pub fn compare_generic(a: &str, b: &str) -> Ordering {
    compare_sequences(&tokenize(a), &tokenize(b))
}

/// Compare two versions, returning -1, 0 or 1.
pub fn compare_version(a: &str, b: &str) -> i32 {
    ordering_to_int(compare_generic(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", "v0.99", 1)]
    #[case("v1.0", "v0.99", 1)]
    #[case("v1.0.1", "v1.1.0", -1)]
    #[case("1.0.1", "v1.1.0", -1)]
    #[case("1.0.0", "v0.1.0", 1)]
    #[case("1.0.0", "v1.0.0", 0)]
    #[case("V2", "v2", 0)]
    #[case("1.10", "1.9", 1)]
    #[case("1.01", "1.1", 0)]
    // shorter sequence is lower
    #[case("1.0", "1.0.0", -1)]
    #[case("1", "1.0", -1)]
    #[case("", "0", -1)]
    #[case("", "", 0)]
    #[case("v", "", 0)]
    // suffixes are ordinary segment text
    #[case("1.0.0-beta", "1.0.0", 1)]
    #[case("1.0.0-alpha", "1.0.0-beta", -1)]
    #[case("1.0.a", "1.0.b", -1)]
    // numeric segments rank below text segments
    #[case("9", "1a", -1)]
    #[case("1.10", "1.1a", -1)]
    fn compare_version_returns_expected(#[case] a: &str, #[case] b: &str, #[case] expected: i32) {
        assert_eq!(compare_version(a, b), expected);
        assert_eq!(compare_version(b, a), -expected);
    }

    #[test]
    fn comparator_delegates_to_compare_generic() {
        assert_eq!(
            GenericComparator.compare("v1.0.1", "v1.1.0"),
            Ordering::Less
        );
    }
}
