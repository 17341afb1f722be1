//! Version parsing and ordering
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Tokenizer  │────▶│   Segment   │◀────│ Comparators │
//! │  (split)    │     │  (compare)  │     │ (policies)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │   Select    │
//!                                         │ (sort, max) │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`]: `v` prefix and build metadata stripping, dot splitting
//! - [`segment`]: Numeric/opaque segments and the segment comparison primitive
//! - [`comparator`]: `VersionComparator` trait and the `Policy` selector
//! - [`generic`]: Generic dot-segment comparison
//! - [`golang`]: Go module comparison (pre-releases, pseudo-versions)
//! - [`select`]: Sorting and picking the latest/oldest version

pub mod comparator;
pub mod generic;
pub mod golang;
pub mod segment;
pub mod select;
pub mod tokenizer;
