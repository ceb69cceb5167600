use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::config::ProvidersConfig;
use super::fixture::EvidenceFixture;
use super::http_client::HttpClient;
use super::{GoogleFactCheckProvider, GoogleSearchProvider};
use crate::domain::evidence::EvidenceProvider;
use crate::domain::DomainError;

/// Factory for creating evidence providers
#[derive(Debug)]
pub struct EvidenceProviderFactory;

impl EvidenceProviderFactory {
    /// Create the configured providers, web search first.
    ///
    /// A fixture path replaces both network providers.
    pub fn create_all(
        config: &ProvidersConfig,
        request_timeout: Duration,
    ) -> Result<Vec<Arc<dyn EvidenceProvider>>, DomainError> {
        if let Some(path) = &config.fixture_path {
            info!(path = %path.display(), "Serving evidence from fixture file");
            return Self::create_from_fixture(path);
        }

        let http_client = HttpClient::with_timeout(request_timeout)?;
        let mut providers: Vec<Arc<dyn EvidenceProvider>> = Vec::new();

        if config.web_search.enabled {
            let provider = GoogleSearchProvider::with_base_url(
                http_client.clone(),
                config.web_search.api_key.clone(),
                config.web_search.engine_id.clone(),
                &config.web_search.base_url,
            )
            .with_results_per_query(config.web_search.results_per_query);

            if !provider.is_configured() {
                warn!("Web search enabled but API key or engine id missing; it will return no evidence");
            }
            providers.push(Arc::new(provider));
        }

        if config.fact_check.enabled {
            let mut provider = GoogleFactCheckProvider::with_base_url(
                http_client,
                config.fact_check.api_key.clone(),
                &config.fact_check.base_url,
            );

            if let Some(language_code) = &config.fact_check.language_code {
                provider = provider.with_language_code(language_code);
            }

            if !provider.is_configured() {
                warn!("Fact-check search enabled but API key missing; it will return no evidence");
            }
            providers.push(Arc::new(provider));
        }

        Ok(providers)
    }

    /// Create fixture-backed providers from a JSON file
    pub fn create_from_fixture(
        path: impl AsRef<std::path::Path>,
    ) -> Result<Vec<Arc<dyn EvidenceProvider>>, DomainError> {
        Ok(EvidenceFixture::load(path)?.into_providers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_both_network_providers() {
        let mut config = ProvidersConfig::default();
        config.web_search.api_key = Some("key".into());
        config.web_search.engine_id = Some("cx".into());
        config.fact_check.api_key = Some("key".into());

        let providers = EvidenceProviderFactory::create_all(&config, Duration::from_secs(4)).unwrap();

        let names: Vec<&str> = providers.iter().map(|p| p.provider_name()).collect();
        assert_eq!(names, vec!["web_search", "fact_check"]);
        assert!(providers.iter().all(|p| p.is_configured()));
    }

    #[test]
    fn test_disabled_providers_are_skipped() {
        let mut config = ProvidersConfig::default();
        config.web_search.enabled = false;

        let providers = EvidenceProviderFactory::create_all(&config, Duration::from_secs(4)).unwrap();

        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].provider_name(), "fact_check");
        assert!(!providers[0].is_configured());
    }

    #[test]
    fn test_missing_fixture_is_configuration_error() {
        let config = ProvidersConfig {
            fixture_path: Some("/nonexistent/evidence.json".into()),
            ..Default::default()
        };

        let error = EvidenceProviderFactory::create_all(&config, Duration::from_secs(4)).unwrap_err();
        assert!(matches!(error, DomainError::Configuration { .. }));
    }
}
