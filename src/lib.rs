//! Misinfo Guard
//!
//! Fact-check verdict engine: retrieves evidence for claims from
//! independent providers, weighs it by source credibility, detects
//! misinformation red flags and resolves every claim to a binary verdict
//! with a confidence and an explanation.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::credibility::CredibilityTable;
use infrastructure::{
    evidence::{EvidenceGatherer, EvidenceProviderFactory},
    fact_check::FactCheckOrchestrator,
    stats::InMemoryStatsRecorder,
};
use tracing::info;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let orchestrator = build_orchestrator(config)?;

    Ok(AppState::new(
        Arc::new(orchestrator),
        Arc::new(InMemoryStatsRecorder::new()),
    ))
}

/// Build the fact-check engine from configuration
pub fn build_orchestrator(config: &AppConfig) -> anyhow::Result<FactCheckOrchestrator> {
    config.validate()?;

    let providers =
        EvidenceProviderFactory::create_all(&config.providers, config.engine.provider_timeout())?;
    let credibility = CredibilityTable::from_config(&config.credibility);

    info!(
        providers = ?providers.iter().map(|p| p.provider_name()).collect::<Vec<_>>(),
        credibility_domains = credibility.len(),
        "Fact-check engine configured"
    );

    let gatherer = EvidenceGatherer::new(providers, config.engine.provider_timeout());

    Ok(FactCheckOrchestrator::new(
        gatherer,
        Arc::new(credibility),
        config.verdict.clone(),
        config.engine.clone(),
    ))
}
