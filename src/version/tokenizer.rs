//! Splits raw version strings into segments

use crate::version::segment::Segment;

/// Strip a single leading `v` or `V`.
///
/// Only the first character is considered: "vv1" -> "v1".
pub fn strip_v_prefix(version: &str) -> &str {
    version.strip_prefix(['v', 'V']).unwrap_or(version)
}

/// Drop build metadata: everything from the first `+` on.
pub fn strip_build_metadata(version: &str) -> &str {
    version.split_once('+').map_or(version, |(before, _)| before)
}

/// Split an already-normalized string on `.`.
///
/// An empty string yields no segments.
pub fn split_segments(version: &str) -> Vec<Segment<'_>> {
    if version.is_empty() {
        return Vec::new();
    }
    version.split('.').map(Segment::new).collect()
}

/// Split a pre-release on `.` and `-`, so dash-joined runs such as
/// `20190626092158-b2ccc519800e` yield one segment per run.
///
/// An empty string yields no segments.
pub fn split_pre_release_segments(pre_release: &str) -> Vec<Segment<'_>> {
    if pre_release.is_empty() {
        return Vec::new();
    }
    pre_release.split(['.', '-']).map(Segment::new).collect()
}

/// Tokenize a version for the generic policy.
///
/// Only the `v` prefix is removed; `-` and `+` suffixes stay part of the
/// segment they appear in.
pub fn tokenize(version: &str) -> Vec<Segment<'_>> {
    split_segments(strip_v_prefix(version))
}
