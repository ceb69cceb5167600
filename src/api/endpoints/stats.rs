//! Usage statistics endpoint

use axum::extract::State;
use tracing::warn;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::stats::StatsSnapshot;

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsSnapshot>, ApiError> {
    let snapshot = state.stats_recorder.snapshot().await.map_err(|e| {
        warn!(error = %e, "Failed to read statistics");
        ApiError::unavailable("Statistics are temporarily unavailable")
    })?;

    Ok(Json(snapshot))
}
