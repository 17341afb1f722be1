//! Ordering and picking from sets of versions

use std::cmp::Ordering;

use crate::version::comparator::VersionComparator;

/// Sort versions ascending under the given comparator.
///
/// The sort is stable: versions comparing equal keep their input order.
/// Each version is binary-inserted into the sorted prefix, so a comparator
/// that is not a total order (the Go pre-release dash-suffix rule) yields
/// some order instead of a panic from `slice::sort_by`.
pub fn sort_versions<C: VersionComparator + ?Sized>(comparator: &C, versions: &mut [String]) {
    for idx in 1..versions.len() {
        let (sorted, rest) = versions.split_at(idx);
        let version = &rest[0];
        let insert_at =
            sorted.partition_point(|placed| comparator.compare(placed, version).is_le());
        versions[insert_at..=idx].rotate_right(1);
    }
}

/// Return the greatest version.
///
/// Among equal maxima the first one in input order wins.
/// Returns None if `versions` is empty.
pub fn latest_version<'a, C: VersionComparator + ?Sized>(
    comparator: &C,
    versions: &'a [String],
) -> Option<&'a str> {
    pick(comparator, versions, Ordering::Greater)
}

/// Return the smallest version.
///
/// Among equal minima the first one in input order wins.
/// Returns None if `versions` is empty.
pub fn oldest_version<'a, C: VersionComparator + ?Sized>(
    comparator: &C,
    versions: &'a [String],
) -> Option<&'a str> {
    pick(comparator, versions, Ordering::Less)
}

fn pick<'a, C: VersionComparator + ?Sized>(
    comparator: &C,
    versions: &'a [String],
    wanted: Ordering,
) -> Option<&'a str> {
    let (first, rest) = versions.split_first()?;

    let picked = rest.iter().fold(first.as_str(), |best, candidate| {
        if comparator.compare(candidate, best) == wanted {
            candidate.as_str()
        } else {
            best
        }
    });

    Some(picked)
}
