//! Fixture evidence providers
//!
//! Serve canned evidence from memory or a JSON file so the engine can run
//! without network access.
//!
//! ```json
//! {
//!   "search": {
//!     "items": [
//!       { "url": "https://apnews.com/a", "title": "...", "snippet": "...", "claim_contains": "vaccine" }
//!     ]
//!   },
//!   "fact_check": {
//!     "fail": true
//!   }
//! }
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::evidence::{EvidenceItem, EvidenceOrigin, EvidenceProvider, EvidenceQuery};
use crate::domain::DomainError;

/// One canned evidence entry
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureEntry {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    /// Only served for claims containing this text (case-insensitive)
    #[serde(default)]
    pub claim_contains: Option<String>,
}

impl FixtureEntry {
    fn matches(&self, claim_text: &str) -> bool {
        match &self.claim_contains {
            Some(needle) => claim_text.to_lowercase().contains(&needle.to_lowercase()),
            None => true,
        }
    }

    fn to_item(&self, origin: EvidenceOrigin) -> EvidenceItem {
        let mut item = EvidenceItem::new(&self.url, &self.title, &self.snippet, origin);

        if let Some(name) = &self.source_name {
            item = item.with_source_name(name);
        }
        if let Some(rating) = &self.rating {
            item = item.with_rating(rating);
        }
        item
    }
}

/// Canned behaviour for one provider
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureSource {
    #[serde(default)]
    pub items: Vec<FixtureEntry>,
    /// Simulate a provider failure
    #[serde(default)]
    pub fail: bool,
    /// Simulated latency
    #[serde(default)]
    pub delay_ms: Option<u64>,
}

/// Fixture file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvidenceFixture {
    #[serde(default)]
    pub search: FixtureSource,
    #[serde(default)]
    pub fact_check: FixtureSource,
}

impl EvidenceFixture {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::configuration(format!("Invalid evidence fixture: {}", e)))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            DomainError::configuration(format!(
                "Failed to read evidence fixture {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&json)
    }

    /// One provider per origin, web search first
    pub fn into_providers(self) -> Vec<Arc<dyn EvidenceProvider>> {
        vec![
            Arc::new(StaticEvidenceProvider::new(
                "fixture_search",
                EvidenceOrigin::Search,
                self.search,
            )),
            Arc::new(StaticEvidenceProvider::new(
                "fixture_fact_check",
                EvidenceOrigin::FactCheckDb,
                self.fact_check,
            )),
        ]
    }
}

/// Provider serving a fixed evidence list
#[derive(Debug, Clone)]
pub struct StaticEvidenceProvider {
    name: &'static str,
    origin: EvidenceOrigin,
    source: FixtureSource,
}

impl StaticEvidenceProvider {
    pub fn new(name: &'static str, origin: EvidenceOrigin, source: FixtureSource) -> Self {
        Self {
            name,
            origin,
            source,
        }
    }

    pub fn with_entries(name: &'static str, origin: EvidenceOrigin, items: Vec<FixtureEntry>) -> Self {
        Self::new(
            name,
            origin,
            FixtureSource {
                items,
                ..Default::default()
            },
        )
    }
}

#[async_trait]
impl EvidenceProvider for StaticEvidenceProvider {
    async fn search(&self, query: &EvidenceQuery) -> Result<Vec<EvidenceItem>, DomainError> {
        if let Some(delay) = self.source.delay_ms {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        if self.source.fail {
            return Err(DomainError::provider(self.name, "Simulated fixture failure"));
        }

        Ok(self
            .source
            .items
            .iter()
            .filter(|entry| entry.matches(&query.claim_text))
            .map(|entry| entry.to_item(self.origin))
            .collect())
    }

    fn provider_name(&self) -> &'static str {
        self.name
    }

    fn origin(&self) -> EvidenceOrigin {
        self.origin
    }
}
