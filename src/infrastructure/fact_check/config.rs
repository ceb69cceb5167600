//! Engine timing and limits configuration

use std::time::Duration;

use serde::Deserialize;

use crate::domain::claim::MAX_CLAIM_CHARS;
use crate::domain::evidence::{AggregationConfig, DEFAULT_DISPLAY_LIMIT};
use crate::domain::DomainError;

/// Configuration for the fact-check orchestrator
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Timeout for a single evidence provider call
    #[serde(default = "default_provider_timeout_ms")]
    pub provider_timeout_ms: u64,
    /// Timeout for evaluating one claim end to end
    #[serde(default = "default_claim_timeout_ms")]
    pub claim_timeout_ms: u64,
    /// Deadline for a whole request; claims still running are cancelled
    #[serde(default = "default_request_deadline_ms")]
    pub request_deadline_ms: u64,
    /// Claims evaluated concurrently
    #[serde(default = "default_max_concurrent_claims")]
    pub max_concurrent_claims: usize,
    /// Sources exposed per verdict
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
    #[serde(default = "default_max_claim_chars")]
    pub max_claim_chars: usize,
    /// Also scan evidence snippets for red flags
    #[serde(default)]
    pub scan_evidence_snippets: bool,
    /// Minimum claim/snippet overlap for search results (0 keeps all)
    #[serde(default)]
    pub min_relevance: f64,
}

fn default_provider_timeout_ms() -> u64 {
    4_000
}

fn default_claim_timeout_ms() -> u64 {
    10_000
}

fn default_request_deadline_ms() -> u64 {
    25_000
}

fn default_max_concurrent_claims() -> usize {
    4
}

fn default_display_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}

fn default_max_claim_chars() -> usize {
    MAX_CLAIM_CHARS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            provider_timeout_ms: default_provider_timeout_ms(),
            claim_timeout_ms: default_claim_timeout_ms(),
            request_deadline_ms: default_request_deadline_ms(),
            max_concurrent_claims: default_max_concurrent_claims(),
            display_limit: default_display_limit(),
            max_claim_chars: default_max_claim_chars(),
            scan_evidence_snippets: false,
            min_relevance: 0.0,
        }
    }
}

impl EngineConfig {
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }

    pub fn claim_timeout(&self) -> Duration {
        Duration::from_millis(self.claim_timeout_ms)
    }

    pub fn request_deadline(&self) -> Duration {
        Duration::from_millis(self.request_deadline_ms)
    }

    pub fn aggregation(&self) -> AggregationConfig {
        AggregationConfig {
            display_limit: self.display_limit,
            min_relevance: self.min_relevance,
        }
    }

    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_claim_timeout(mut self, timeout: Duration) -> Self {
        self.claim_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_request_deadline(mut self, deadline: Duration) -> Self {
        self.request_deadline_ms = deadline.as_millis() as u64;
        self
    }

    pub fn with_max_concurrent_claims(mut self, max: usize) -> Self {
        self.max_concurrent_claims = max;
        self
    }

    pub fn with_scan_evidence_snippets(mut self, scan: bool) -> Self {
        self.scan_evidence_snippets = scan;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.provider_timeout_ms == 0 || self.claim_timeout_ms == 0 || self.request_deadline_ms == 0 {
            return Err(DomainError::configuration("engine timeouts must be greater than zero"));
        }

        if self.provider_timeout_ms > self.claim_timeout_ms {
            return Err(DomainError::configuration(format!(
                "engine.provider_timeout_ms ({}) cannot exceed engine.claim_timeout_ms ({})",
                self.provider_timeout_ms, self.claim_timeout_ms
            )));
        }

        if self.max_concurrent_claims == 0 {
            return Err(DomainError::configuration(
                "engine.max_concurrent_claims must be at least 1",
            ));
        }

        if self.display_limit == 0 || self.max_claim_chars == 0 {
            return Err(DomainError::configuration(
                "engine.display_limit and engine.max_claim_chars must be at least 1",
            ));
        }

        if !(0.0..=1.0).contains(&self.min_relevance) {
            return Err(DomainError::configuration(format!(
                "engine.min_relevance must be within [0, 1], got {}",
                self.min_relevance
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();

        assert_eq!(config.provider_timeout(), Duration::from_secs(4));
        assert_eq!(config.claim_timeout(), Duration::from_secs(10));
        assert_eq!(config.request_deadline(), Duration::from_secs(25));
        assert_eq!(config.max_concurrent_claims, 4);
        assert_eq!(config.display_limit, 5);
        assert_eq!(config.max_claim_chars, 10_000);
        assert!(!config.scan_evidence_snippets);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_provider_timeout_must_fit_claim_timeout() {
        let config = EngineConfig::default()
            .with_provider_timeout(Duration::from_secs(20))
            .with_claim_timeout(Duration::from_secs(5));

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = EngineConfig::default().with_max_concurrent_claims(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_aggregation_settings() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"display_limit": 3, "min_relevance": 0.15}"#).unwrap();
        let aggregation = config.aggregation();

        assert_eq!(aggregation.display_limit, 3);
        assert_eq!(aggregation.min_relevance, 0.15);
    }
}
