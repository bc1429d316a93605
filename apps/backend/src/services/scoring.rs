//! Scoring requests against memorise-core

use chrono::Utc;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{CompareOptions, CompareRequest, CompareRequestOptions, CompareResponse};
use memorise_core::compare_with;

/// Merge request options over the defaults and the configured limits.
pub fn effective_options(options: &CompareRequestOptions, config: &Config) -> CompareOptions {
    let defaults = CompareOptions::default();
    CompareOptions {
        granularity: options.granularity.unwrap_or(config.default_granularity),
        case_sensitive: options.case_sensitive.unwrap_or(defaults.case_sensitive),
        annotate_substitutions: options
            .annotate_substitutions
            .unwrap_or(defaults.annotate_substitutions),
        max_units: config.max_units,
        max_cells: config.max_cells,
    }
}

/// Run scoring off the async runtime. Alignment is CPU and memory bound and
/// must not occupy a runtime worker.
pub async fn run_blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ApiError::Internal(format!("scoring task failed: {}", e)))?
}

/// Score one reconstruction.
pub fn score(request: &CompareRequest, config: &Config) -> Result<CompareResponse> {
    let pass_threshold = request
        .options
        .pass_threshold
        .unwrap_or(config.default_pass_threshold);
    if pass_threshold > 100 {
        return Err(ApiError::BadRequest(format!(
            "pass_threshold must be at most 100, got {}",
            pass_threshold
        )));
    }

    let options = effective_options(&request.options, config);
    let result = compare_with(&request.reference, &request.candidate, &options)?;

    tracing::debug!(
        total = result.total(),
        correct = result.correct_count(),
        missed = result.missed_count(),
        wrong = result.wrong_count(),
        extra = result.extra_count(),
        "Scored reconstruction"
    );

    Ok(CompareResponse {
        id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        pass_threshold,
        passed: result.is_passing(pass_threshold),
        segments: result.segments(),
        result,
    })
}

/// Score a batch; the first invalid item fails the whole batch.
pub fn score_batch(items: &[CompareRequest], config: &Config) -> Result<Vec<CompareResponse>> {
    if items.len() > config.max_batch_items {
        return Err(ApiError::BadRequest(format!(
            "batch has {} items, limit is {}",
            items.len(),
            config.max_batch_items
        )));
    }

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            score(item, config).map_err(|e| match e {
                ApiError::InvalidArgument(source) => ApiError::InvalidItem { index: idx, source },
                ApiError::BadRequest(msg) => ApiError::BadRequest(format!("item {}: {}", idx, msg)),
                other => other,
            })
        })
        .collect()
}
