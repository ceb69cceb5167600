//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;
use regex::Regex;

use super::config::MetricsConfig;

static UUID_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}").unwrap()
});

static NUMERIC_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+(/|$)").unwrap());

const MAX_PATH_LABEL_LEN: usize = 50;

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("misinfo_guard_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
            tracing::info!(path = %config.path, "Prometheus metrics initialized");

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics, path: &str) -> Router {
    Router::new()
        .route(path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Record one evidence provider call
pub fn record_provider_outcome(provider: &str, outcome: &str, duration: Duration, results: usize) {
    let labels = [
        ("provider", provider.to_string()),
        ("outcome", outcome.to_string()),
    ];

    counter!("evidence_provider_requests_total", &labels).increment(1);
    histogram!("evidence_provider_duration_seconds", &labels).record(duration.as_secs_f64());
    counter!("evidence_items_total", "provider" => provider.to_string()).increment(results as u64);
}

/// Record a verdict produced for one claim
pub fn record_verdict(verdict: &str, degraded: Option<&str>, confidence: f64) {
    counter!("verdicts_total", "verdict" => verdict.to_string()).increment(1);
    histogram!("verdict_confidence", "verdict" => verdict.to_string()).record(confidence);

    if let Some(reason) = degraded {
        counter!("claim_fallbacks_total", "reason" => reason.to_string()).increment(1);
    }
}

/// Record a completed fact-check request
pub fn record_fact_check_request(claims: usize, duration: Duration) {
    counter!("fact_check_requests_total").increment(1);
    counter!("fact_check_claims_total").increment(claims as u64);
    histogram!("fact_check_duration_seconds").record(duration.as_secs_f64());
}

/// Sanitize URL path for metric labels (remove IDs, limit cardinality)
fn sanitize_path(path: &str) -> String {
    let path = UUID_SEGMENT.replace_all(path, "{id}");
    let path = NUMERIC_SEGMENT.replace_all(&path, "/{id}$1");

    path.chars().take(MAX_PATH_LABEL_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path_uuid() {
        let path = "/api/results/550e8400-e29b-41d4-a716-446655440000";
        assert_eq!(sanitize_path(path), "/api/results/{id}");
    }

    #[test]
    fn test_sanitize_path_numeric_id() {
        assert_eq!(sanitize_path("/api/claims/123/sources"), "/api/claims/{id}/sources");
    }

    #[test]
    fn test_sanitize_path_no_id() {
        assert_eq!(sanitize_path("/api/fact-check"), "/api/fact-check");
    }

    #[test]
    fn test_sanitize_path_truncates_long_paths() {
        let path = "/very/long/path/that/exceeds/the/maximum/allowed/length/for/metrics";
        assert!(sanitize_path(path).len() <= MAX_PATH_LABEL_LEN);
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_provider_outcome("web_search", "ok", Duration::from_millis(20), 3);
        record_verdict("LIKELY TRUE", None, 88.0);
        record_verdict("LIKELY FALSE", Some("timeout"), 50.0);
        record_fact_check_request(2, Duration::from_millis(120));
    }
}
