//! Version segments and the segment comparison primitive

use std::cmp::Ordering;

/// One `.`-delimited unit of a version string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// One or more ASCII digits, kept verbatim (leading zeros included)
    Numeric(&'a str),
    /// Anything else, including the empty piece of `1..2`
    Opaque(&'a str),
}

impl<'a> Segment<'a> {
    /// Classify a raw piece as numeric or opaque
    pub fn new(raw: &'a str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Segment::Numeric(raw)
        } else {
            Segment::Opaque(raw)
        }
    }

    /// The text the segment was built from
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Numeric(s) | Segment::Opaque(s) => s,
        }
    }
}

/// Compare two present segments.
///
/// - numeric vs numeric: by value, with no upper bound on magnitude
/// - opaque vs opaque: byte-wise
/// - numeric vs opaque: numeric is lower
pub fn compare_segments(a: &Segment<'_>, b: &Segment<'_>) -> Ordering {
    match (a, b) {
        (Segment::Numeric(a), Segment::Numeric(b)) => compare_digits(a, b),
        (Segment::Opaque(a), Segment::Opaque(b)) => a.cmp(b),
        (Segment::Numeric(_), Segment::Opaque(_)) => Ordering::Less,
        (Segment::Opaque(_), Segment::Numeric(_)) => Ordering::Greater,
    }
}

/// Compare two segments that may be absent.
///
/// An absent segment ranks below every present one, "0" included.
pub fn compare_optional_segments(a: Option<&Segment<'_>>, b: Option<&Segment<'_>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_segments(a, b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Walk two segment sequences in lock-step; the first difference wins.
pub fn compare_sequences(a: &[Segment<'_>], b: &[Segment<'_>]) -> Ordering {
    let len = a.len().max(b.len());

    for idx in 0..len {
        match compare_optional_segments(a.get(idx), b.get(idx)) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }

    Ordering::Equal
}

// Digit runs are never parsed, so width is unbounded.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
