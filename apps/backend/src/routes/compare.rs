//! Memorisation comparison endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{BatchCompareRequest, BatchCompareResponse, CompareRequest, CompareResponse};
use crate::services::scoring;
use crate::AppState;

/// POST /api/compare
/// Scores one reconstruction against its reference text
pub async fn compare(
    State(state): State<AppState>,
    Json(payload): Json<CompareRequest>,
) -> Result<Json<CompareResponse>> {
    let config = state.config.clone();
    let response = scoring::run_blocking(move || scoring::score(&payload, &config)).await?;

    tracing::info!(
        "Comparison {}: accuracy {}% (passed: {})",
        response.id,
        response.result.accuracy(),
        response.passed
    );

    Ok(Json(response))
}

/// POST /api/compare/batch
pub async fn batch(
    State(state): State<AppState>,
    Json(payload): Json<BatchCompareRequest>,
) -> Result<Json<BatchCompareResponse>> {
    let config = state.config.clone();
    let results =
        scoring::run_blocking(move || scoring::score_batch(&payload.items, &config)).await?;

    tracing::info!("Scored batch of {} comparisons", results.len());

    Ok(Json(BatchCompareResponse { results }))
}
