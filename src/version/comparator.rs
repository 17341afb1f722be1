//! Comparison policy abstraction

use std::cmp::Ordering;

#[cfg(test)]
use mockall::automock;
use serde::Deserialize;

use crate::version::generic::GenericComparator;
use crate::version::golang::GoComparator;

/// Trait for policy-specific version ordering
///
/// Each policy reads version strings differently:
/// - generic: every `.`-separated piece is a segment, suffixes included
/// - golang: build metadata is ignored and pre-releases sort before releases
#[cfg_attr(test, automock)]
pub trait VersionComparator: Send + Sync {
    /// Returns the policy this comparator implements
    fn policy(&self) -> Policy;

    /// Order two version strings
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Comparison policy selectable from config and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Dot-separated segments with an optional `v` prefix
    #[default]
    Generic,
    /// Go module versions, including pseudo-versions
    Golang,
}

impl Policy {
    /// Returns the string representation of the policy
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Generic => "generic",
            Policy::Golang => "golang",
        }
    }

    /// Returns the comparator implementing this policy
    pub fn comparator(&self) -> &'static dyn VersionComparator {
        match self {
            Policy::Generic => &GenericComparator,
            Policy::Golang => &GoComparator,
        }
    }
}

impl std::str::FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic" => Ok(Policy::Generic),
            "golang" | "go" => Ok(Policy::Golang),
            other => Err(format!("unknown policy '{other}' (expected generic or golang)")),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an ordering onto the -1/0/1 convention.
pub fn ordering_to_int(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
