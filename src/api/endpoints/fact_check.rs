//! Fact-check endpoint

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use tracing::{debug, info, warn};

use crate::api::state::AppState;
use crate::api::types::{ApiError, FactCheckRequest, FactCheckResponse, Json};
use crate::domain::claim::Claim;
use crate::domain::stats::{RunSummary, StatsRecorder};

/// POST /api/fact-check
pub async fn fact_check(
    State(state): State<AppState>,
    Json(request): Json<FactCheckRequest>,
) -> Result<Json<FactCheckResponse>, ApiError> {
    let start = Instant::now();
    let claims: Vec<Claim> = request.claims.into_iter().map(Claim::from).collect();

    debug!(claims = claims.len(), "Fact-check request");

    let results = state
        .fact_check_service
        .check_claims(claims)
        .await
        .map_err(ApiError::from)?;

    let summary = RunSummary::from_results(&results);
    info!(
        claims = summary.claims,
        likely_true = summary.likely_true,
        likely_false = summary.likely_false,
        degraded = summary.degraded,
        duration_ms = start.elapsed().as_millis() as u64,
        "Fact-check completed"
    );

    tokio::spawn(record_run(state.stats_recorder.clone(), summary));

    Ok(Json(FactCheckResponse::from_results(results)))
}

/// Record a completed run; failures are logged and otherwise ignored
async fn record_run(recorder: Arc<dyn StatsRecorder>, summary: RunSummary) {
    if let Err(e) = recorder.record_run(summary).await {
        warn!(error = %e, "Failed to record fact-check statistics");
    }
}
