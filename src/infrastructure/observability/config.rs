//! Observability configuration

use serde::Deserialize;

/// Main observability configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ObservabilityConfig {
    #[serde(default)]
    pub tracing: TracingConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// OpenTelemetry span export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TracingConfig {
    /// Export spans over OTLP
    #[serde(default)]
    pub enabled: bool,
    /// OTLP gRPC endpoint (e.g., http://localhost:4317)
    #[serde(default = "default_otlp_endpoint")]
    pub otlp_endpoint: String,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Share of traces sampled, 0.0 to 1.0
    #[serde(default = "default_sampling_ratio")]
    pub sampling_ratio: f64,
}

impl TracingConfig {
    /// Sampling ratio clamped into [0, 1]
    pub fn effective_sampling_ratio(&self) -> f64 {
        if self.sampling_ratio.is_nan() {
            return default_sampling_ratio();
        }
        self.sampling_ratio.clamp(0.0, 1.0)
    }
}

/// Prometheus metrics configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Path the exposition endpoint is mounted at
    #[serde(default = "default_metrics_path")]
    pub path: String,
}

fn default_otlp_endpoint() -> String {
    "http://localhost:4317".to_string()
}

fn default_service_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_sampling_ratio() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            otlp_endpoint: default_otlp_endpoint(),
            service_name: default_service_name(),
            sampling_ratio: default_sampling_ratio(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_metrics_path(),
        }
    }
}
