//! Version string comparison
//!
//! Two policies are provided:
//! - [`compare_version`]: dot-separated segments with an optional `v` prefix
//! - [`compare_version_golang`]: Go module versions, where build metadata is
//!   ignored and pre-releases and pseudo-versions sort before their release
//!
//! Both return -1, 0 or 1.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod version;

pub use version::generic::compare_version;
pub use version::golang::compare_version_golang;
