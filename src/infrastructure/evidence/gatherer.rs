//! Concurrent evidence retrieval
//!
//! Queries every provider for one claim at the same time, each under its
//! own timeout. A failing or slow provider degrades to an empty result and
//! never fails the claim.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::evidence::{EvidenceItem, EvidenceProvider, EvidenceQuery};
use crate::infrastructure::observability::record_provider_outcome;

/// How one provider call ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProviderStatus {
    Succeeded { results: usize },
    Failed { error: String },
    TimedOut,
    /// Skipped because the provider lacks credentials
    Disabled,
}

impl ProviderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Succeeded { .. } => "ok",
            Self::Failed { .. } => "error",
            Self::TimedOut => "timeout",
            Self::Disabled => "disabled",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::TimedOut)
    }
}

/// Status record for one provider call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderOutcome {
    pub provider: &'static str,
    #[serde(flatten)]
    pub status: ProviderStatus,
    pub duration_ms: u64,
}

/// Evidence gathered for one claim, one batch per provider in provider order
#[derive(Debug, Clone, Default)]
pub struct GatheredEvidence {
    pub batches: Vec<Vec<EvidenceItem>>,
    pub outcomes: Vec<ProviderOutcome>,
}

impl GatheredEvidence {
    /// No provider succeeded and at least one failed or timed out
    pub fn all_failed(&self) -> bool {
        let any_failure = self.outcomes.iter().any(|o| o.status.is_failure());
        let any_success = self
            .outcomes
            .iter()
            .any(|o| matches!(o.status, ProviderStatus::Succeeded { .. }));

        any_failure && !any_success
    }
}

/// Fans a query out to every provider concurrently
#[derive(Debug, Clone)]
pub struct EvidenceGatherer {
    providers: Vec<Arc<dyn EvidenceProvider>>,
    provider_timeout: Duration,
}

impl EvidenceGatherer {
    pub fn new(providers: Vec<Arc<dyn EvidenceProvider>>, provider_timeout: Duration) -> Self {
        Self {
            providers,
            provider_timeout,
        }
    }

    pub fn providers(&self) -> &[Arc<dyn EvidenceProvider>] {
        &self.providers
    }

    /// Names of providers with the credentials they need
    pub fn configured_providers(&self) -> Vec<&'static str> {
        self.providers
            .iter()
            .filter(|p| p.is_configured())
            .map(|p| p.provider_name())
            .collect()
    }

    pub async fn gather(&self, query: &EvidenceQuery) -> GatheredEvidence {
        let calls = self
            .providers
            .iter()
            .map(|provider| self.call_provider(provider.as_ref(), query));

        let (batches, outcomes) = join_all(calls).await.into_iter().unzip();

        GatheredEvidence { batches, outcomes }
    }

    async fn call_provider(
        &self,
        provider: &dyn EvidenceProvider,
        query: &EvidenceQuery,
    ) -> (Vec<EvidenceItem>, ProviderOutcome) {
        let name = provider.provider_name();
        let start = Instant::now();

        if !provider.is_configured() {
            debug!(provider = name, "Skipping unconfigured evidence provider");
            return (Vec::new(), outcome(name, ProviderStatus::Disabled, start));
        }

        let (items, status) = match tokio::time::timeout(self.provider_timeout, provider.search(query)).await {
            Ok(Ok(items)) => {
                let results = items.len();
                (items, ProviderStatus::Succeeded { results })
            }
            Ok(Err(e)) => {
                warn!(provider = name, error = %e, "Evidence provider failed");
                (Vec::new(), ProviderStatus::Failed { error: e.to_string() })
            }
            Err(_) => {
                warn!(
                    provider = name,
                    timeout_ms = self.provider_timeout.as_millis() as u64,
                    "Evidence provider timed out"
                );
                (Vec::new(), ProviderStatus::TimedOut)
            }
        };

        let outcome = outcome(name, status, start);
        record_provider_outcome(
            name,
            outcome.status.label(),
            start.elapsed(),
            items.len(),
        );

        (items, outcome)
    }
}

fn outcome(provider: &'static str, status: ProviderStatus, start: Instant) -> ProviderOutcome {
    ProviderOutcome {
        provider,
        status,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evidence::{EvidenceOrigin, MockEvidenceProvider};

    fn item(url: &str, origin: EvidenceOrigin) -> EvidenceItem {
        EvidenceItem::new(url, "t", "s", origin)
    }

    fn query() -> EvidenceQuery {
        EvidenceQuery::new("q", "claim", "en")
    }

    #[tokio::test]
    async fn test_gathers_from_all_providers_in_order() {
        let search = MockEvidenceProvider::new("search", EvidenceOrigin::Search)
            .with_items(vec![item("https://a.com/1", EvidenceOrigin::Search)]);
        let fact_check = MockEvidenceProvider::new("fact", EvidenceOrigin::FactCheckDb)
            .with_items(vec![
                item("https://b.com/1", EvidenceOrigin::FactCheckDb),
                item("https://b.com/2", EvidenceOrigin::FactCheckDb),
            ]);

        let gatherer = EvidenceGatherer::new(
            vec![Arc::new(search), Arc::new(fact_check)],
            Duration::from_secs(1),
        );

        let gathered = gatherer.gather(&query()).await;

        assert_eq!(gathered.batches.len(), 2);
        assert_eq!(gathered.batches[0].len(), 1);
        assert_eq!(gathered.batches[1].len(), 2);
        assert_eq!(gathered.outcomes[1].status, ProviderStatus::Succeeded { results: 2 });
        assert!(!gathered.all_failed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_provider_times_out_without_blocking_other() {
        let slow = MockEvidenceProvider::new("slow", EvidenceOrigin::Search)
            .with_delay(Duration::from_secs(30))
            .with_items(vec![item("https://slow.com/1", EvidenceOrigin::Search)]);
        let fast = MockEvidenceProvider::new("fast", EvidenceOrigin::FactCheckDb)
            .with_items(vec![item("https://fast.com/1", EvidenceOrigin::FactCheckDb)]);

        let gatherer = EvidenceGatherer::new(
            vec![Arc::new(slow), Arc::new(fast)],
            Duration::from_millis(500),
        );

        let gathered = gatherer.gather(&query()).await;

        assert!(gathered.batches[0].is_empty());
        assert_eq!(gathered.outcomes[0].status, ProviderStatus::TimedOut);
        assert_eq!(gathered.batches[1].len(), 1);
        assert!(!gathered.all_failed());
    }

    #[tokio::test]
    async fn test_all_providers_failing() {
        let first = MockEvidenceProvider::new("first", EvidenceOrigin::Search).with_error("HTTP 500");
        let second = MockEvidenceProvider::new("second", EvidenceOrigin::FactCheckDb).with_error("refused");

        let gatherer = EvidenceGatherer::new(
            vec![Arc::new(first), Arc::new(second)],
            Duration::from_secs(1),
        );

        let gathered = gatherer.gather(&query()).await;

        assert!(gathered.batches.iter().all(Vec::is_empty));
        assert!(gathered.all_failed());
        assert!(matches!(gathered.outcomes[0].status, ProviderStatus::Failed { .. }));
    }

    #[tokio::test]
    async fn test_no_providers_is_not_a_failure() {
        let gatherer = EvidenceGatherer::new(Vec::new(), Duration::from_secs(1));
        let gathered = gatherer.gather(&query()).await;

        assert!(gathered.batches.is_empty());
        assert!(!gathered.all_failed());
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = ProviderOutcome {
            provider: "web_search",
            status: ProviderStatus::Failed {
                error: "HTTP 500".to_string(),
            },
            duration_ms: 12,
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "HTTP 500");
        assert_eq!(json["provider"], "web_search");
    }
}
