//! Option types for memorisation comparisons.

use serde::{Deserialize, Serialize};

/// Default upper bound on units per side.
pub const DEFAULT_MAX_UNITS: usize = 5_000;

/// Default upper bound on alignment table cells, `(reference + 1) *
/// (candidate + 1)`. At four bytes per cell this caps a table near 16 MiB.
pub const DEFAULT_MAX_CELLS: usize = 4_000_000;

/// What counts as one comparison unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Extended grapheme cluster (what a reader sees as one character).
    Grapheme,
    /// Single Unicode scalar value.
    CodePoint,
}

impl Default for Granularity {
    fn default() -> Self {
        Self::Grapheme
    }
}

impl Granularity {
    /// Get the granularity name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grapheme => "grapheme",
            Self::CodePoint => "code_point",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "grapheme" => Some(Self::Grapheme),
            "code_point" => Some(Self::CodePoint),
            _ => None,
        }
    }
}

/// Options controlling a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    pub granularity: Granularity,
    /// When false, units are compared on their lowercase form.
    pub case_sensitive: bool,
    /// Pair unmatched reference units with what the user typed in the
    /// same alignment gap, producing `Wrong` entries.
    pub annotate_substitutions: bool,
    pub max_units: usize,
    pub max_cells: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            granularity: Granularity::default(),
            case_sensitive: true,
            annotate_substitutions: false,
            max_units: DEFAULT_MAX_UNITS,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}
