//! Go module version comparison
//!
//! Go module versions carry optional suffixes:
//! - Build metadata: v2.0.0+incompatible (ignored when ordering)
//! - Pre-releases: v1.0.0-beta.1 (sorts before v1.0.0)
//! - Pseudo-versions: v0.0.0-20210101000000-abcdef123456

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::version::comparator::{Policy, VersionComparator, ordering_to_int};
use crate::version::segment::compare_sequences;
use crate::version::tokenizer::{
    split_pre_release_segments, split_segments, strip_build_metadata, strip_v_prefix,
};

/// Pseudo-version shapes:
/// - vX.0.0-yyyymmddhhmmss-commit (no base version)
/// - vX.Y.Z-0.yyyymmddhhmmss-commit (base is a release)
/// - vX.Y.Z-pre.0.yyyymmddhhmmss-commit (base is a pre-release)
static PSEUDO_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[vV]?[0-9]+\.(0\.0-|\d+\.\d+-([^+]*\.)?0\.)\d{14}-[A-Za-z0-9]+(\+[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*)?$",
    )
    .unwrap()
});

pub struct GoComparator;

impl VersionComparator for GoComparator {
    fn policy(&self) -> Policy {
        Policy::Golang
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        compare_golang(a, b)
    }
}

/// A Go version split into its ordered parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GoVersion<'a> {
    core: &'a str,
    pre_release: Option<&'a str>,
}

impl<'a> GoVersion<'a> {
    fn parse(version: &'a str) -> Self {
        let normalized = normalize_go_version(version);
        match normalized.split_once('-') {
            Some((core, pre_release)) => Self {
                core,
                pre_release: Some(pre_release),
            },
            None => Self {
                core: normalized,
                pre_release: None,
            },
        }
    }
}

/// Normalize a Go module version for comparison.
///
/// Handles:
/// - v prefix: v1.2.3 -> 1.2.3
/// - build metadata: v2.0.0+incompatible -> 2.0.0
pub fn normalize_go_version(version: &str) -> &str {
    strip_build_metadata(strip_v_prefix(version))
}

/// Check if a version is a Go pseudo-version.
pub fn is_pseudo_version(version: &str) -> bool {
    PSEUDO_VERSION_RE.is_match(version)
}

/// Order two Go module versions.
///
/// Cores compare segment by segment. On equal cores a release outranks any
/// pre-release, and two pre-releases compare run by run, splitting on `.`
/// and `-`.
pub fn compare_golang(a: &str, b: &str) -> Ordering {
    let (raw_a, raw_b) = (a, b);
    let a = GoVersion::parse(raw_a);
    let b = GoVersion::parse(raw_b);

    match compare_sequences(&split_segments(a.core), &split_segments(b.core)) {
        Ordering::Equal => {}
        ord => return ord,
    }

    match (a.pre_release, b.pre_release) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            trace!(
                a_pseudo = is_pseudo_version(raw_a),
                b_pseudo = is_pseudo_version(raw_b),
                "comparing pre-releases '{}' and '{}'",
                a,
                b
            );
            compare_pre_releases(a, b)
        }
    }
}

/// Compare two Go module versions, returning -1, 0 or 1.
pub fn compare_version_golang(a: &str, b: &str) -> i32 {
    ordering_to_int(compare_golang(a, b))
}

// A pre-release that only adds a `-commit` tail to the other one is treated
// as the same version: "20190626092158-b2ccc519800e" == "20190626092158".
// This makes "x-a" == "x" == "x-b" while "x-a" < "x-b", so it is not transitive.
fn compare_pre_releases(a: &str, b: &str) -> Ordering {
    if extends_with_dash(a, b) || extends_with_dash(b, a) {
        trace!("pre-releases '{}' and '{}' differ only by a dash suffix", a, b);
        return Ordering::Equal;
    }
    compare_sequences(&split_pre_release_segments(a), &split_pre_release_segments(b))
}

fn extends_with_dash(longer: &str, shorter: &str) -> bool {
    longer
        .strip_prefix(shorter)
        .is_some_and(|rest| rest.starts_with('-'))
}
