//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from memorise-core
pub use memorise_core::{
    AlignmentEntry, CompareOptions, ComparisonResult, DiffSegment, Granularity, SegmentKind,
};

/// Per-request comparison options; unset fields fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareRequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotate_substitutions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_threshold: Option<u8>,
}

/// POST /api/compare body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub reference: String,
    pub candidate: String,
    #[serde(default)]
    pub options: CompareRequestOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    pub id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub pass_threshold: u8,
    pub passed: bool,
    pub result: ComparisonResult,
    pub segments: Vec<DiffSegment>,
}

/// POST /api/compare/batch body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCompareRequest {
    pub items: Vec<CompareRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchCompareResponse {
    pub results: Vec<CompareResponse>,
}
