//! Fact-check API endpoints

pub mod fact_check;
pub mod stats;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create the `/api` router
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/fact-check", post(fact_check::fact_check))
        .route("/stats", get(stats::get_stats))
}
