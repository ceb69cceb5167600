//! Health check endpoints for Kubernetes probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::api::types::Json;
use serde::Serialize;

use super::state::AppState;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl HealthResponse {
    fn new(status: HealthStatus) -> Self {
        Self {
            status,
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            checks: None,
            latency_ms: None,
        }
    }
}

/// Service info; 200 whenever the process is serving
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::new(HealthStatus::Healthy)))
}

/// Readiness check; unavailable when no evidence provider is configured
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let checks = vec![check_evidence_providers(&state), check_stats_recorder(&state).await];

    let overall_status = if checks.iter().any(|c| c.status == HealthStatus::Unhealthy) {
        HealthStatus::Unhealthy
    } else if checks.iter().any(|c| c.status == HealthStatus::Degraded) {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    let mut response = HealthResponse::new(overall_status);
    response.checks = Some(checks);
    response.latency_ms = Some(start.elapsed().as_millis() as u64);

    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::OK, // Still accept requests
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - simple check to verify the service is running
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

fn check_evidence_providers(state: &AppState) -> HealthCheck {
    let providers = state.fact_check_service.configured_providers();

    let (status, message) = match providers.len() {
        0 => (
            HealthStatus::Unhealthy,
            "no evidence provider is configured".to_string(),
        ),
        1 => (
            HealthStatus::Degraded,
            format!("only {} is configured", providers[0]),
        ),
        _ => (HealthStatus::Healthy, providers.join(", ")),
    };

    HealthCheck {
        name: "evidence_providers".to_string(),
        status,
        message: Some(message),
        latency_ms: None,
    }
}

async fn check_stats_recorder(state: &AppState) -> HealthCheck {
    let start = Instant::now();

    match state.stats_recorder.snapshot().await {
        Ok(_) => HealthCheck {
            name: "stats_recorder".to_string(),
            status: HealthStatus::Healthy,
            message: None,
            latency_ms: Some(start.elapsed().as_millis() as u64),
        },
        // Statistics never gate fact-checking
        Err(e) => HealthCheck {
            name: "stats_recorder".to_string(),
            status: HealthStatus::Degraded,
            message: Some(e.to_string()),
            latency_ms: Some(start.elapsed().as_millis() as u64),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::to_bytes;

    use super::*;
    use crate::api::state::mock::{state_with, MockFactCheckService};
    use crate::domain::stats::mock::FailingStatsRecorder;

    async fn ready_body(state: AppState) -> (StatusCode, serde_json::Value) {
        let response = ready_check(State(state)).await.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Degraded).unwrap(),
            "\"degraded\""
        );
    }

    #[test]
    fn test_health_response_serialization() {
        let json = serde_json::to_value(HealthResponse::new(HealthStatus::Healthy)).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "misinfo-guard");
        assert!(json.get("checks").is_none());
    }

    #[tokio::test]
    async fn test_ready_with_all_providers() {
        let (status, body) = ready_body(state_with(MockFactCheckService::new())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["checks"][0]["message"], "web_search, fact_check");
    }

    #[tokio::test]
    async fn test_ready_with_one_provider_is_degraded() {
        let service = MockFactCheckService::new().with_providers(vec!["fact_check"]);
        let (status, body) = ready_body(state_with(service)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
    }

    #[tokio::test]
    async fn test_ready_without_providers_is_unavailable() {
        let service = MockFactCheckService::new().with_providers(Vec::new());
        let (status, body) = ready_body(state_with(service)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unhealthy");
    }

    #[tokio::test]
    async fn test_failing_stats_only_degrades() {
        let state = AppState::new(
            Arc::new(MockFactCheckService::new()),
            Arc::new(FailingStatsRecorder),
        );
        let (status, body) = ready_body(state).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["checks"][1]["name"], "stats_recorder");
    }
}
