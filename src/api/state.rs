//! Application state for shared services

use std::sync::Arc;

use crate::domain::claim::Claim;
use crate::domain::stats::StatsRecorder;
use crate::domain::verdict::VerdictResult;
use crate::domain::DomainError;
use crate::infrastructure::fact_check::FactCheckOrchestrator;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub fact_check_service: Arc<dyn FactCheckServiceTrait>,
    pub stats_recorder: Arc<dyn StatsRecorder>,
}

/// Trait for the fact-check engine as seen by the handlers
#[async_trait::async_trait]
pub trait FactCheckServiceTrait: Send + Sync {
    async fn check_claims(&self, claims: Vec<Claim>) -> Result<Vec<VerdictResult>, DomainError>;

    /// Names of evidence providers able to serve requests
    fn configured_providers(&self) -> Vec<&'static str>;
}

#[async_trait::async_trait]
impl FactCheckServiceTrait for FactCheckOrchestrator {
    async fn check_claims(&self, claims: Vec<Claim>) -> Result<Vec<VerdictResult>, DomainError> {
        FactCheckOrchestrator::check_claims(self, claims).await
    }

    fn configured_providers(&self) -> Vec<&'static str> {
        FactCheckOrchestrator::configured_providers(self)
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        fact_check_service: Arc<dyn FactCheckServiceTrait>,
        stats_recorder: Arc<dyn StatsRecorder>,
    ) -> Self {
        Self {
            fact_check_service,
            stats_recorder,
        }
    }
}
