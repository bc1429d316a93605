//! Error types for memorise-core.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias using CompareError.
pub type Result<T> = std::result::Result<T, CompareError>;

/// Which input of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Reference,
    Candidate,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => f.write_str("reference"),
            Self::Candidate => f.write_str("candidate"),
        }
    }
}

/// Precondition failures for a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("reference text is empty")]
    EmptyReference,

    #[error("{side} text has {len} units, limit is {max}")]
    TooLong { side: Side, len: usize, max: usize },

    #[error("alignment needs {cells} cells, limit is {max}")]
    TableTooLarge { cells: usize, max: usize },
}
