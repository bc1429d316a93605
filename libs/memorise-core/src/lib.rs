//! Core memorisation scoring library shared by the web backend and clients.
//!
//! Provides:
//! - Text segmentation into comparison units (grapheme clusters or code points)
//! - Longest common subsequence alignment
//! - Reference/reconstruction comparison with accuracy and per-unit annotations
//! - Shared option types (Granularity, CompareOptions)

pub mod error;
pub mod lcs;
pub mod scorer;
pub mod segment;
pub mod types;

pub use error::{CompareError, Result, Side};
pub use scorer::{
    compare, compare_with, AlignmentEntry, ComparisonResult, DiffSegment, SegmentKind,
};
pub use segment::{unit_count, units};
pub use types::{CompareOptions, Granularity, DEFAULT_MAX_CELLS, DEFAULT_MAX_UNITS};
