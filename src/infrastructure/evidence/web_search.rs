//! Google Custom Search evidence provider

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::http_client::HttpClientTrait;
use crate::domain::evidence::{EvidenceItem, EvidenceOrigin, EvidenceProvider, EvidenceQuery};
use crate::domain::DomainError;

pub const DEFAULT_WEB_SEARCH_BASE_URL: &str = "https://www.googleapis.com";

/// The Custom Search API caps `num` at 10
const MAX_RESULTS_PER_QUERY: u32 = 10;

/// General web search over the Google Custom Search JSON API
#[derive(Debug)]
pub struct GoogleSearchProvider<C: HttpClientTrait> {
    client: C,
    api_key: Option<String>,
    engine_id: Option<String>,
    base_url: String,
    results_per_query: u32,
}

impl<C: HttpClientTrait + 'static> GoogleSearchProvider<C> {
    pub fn new(client: C, api_key: Option<String>, engine_id: Option<String>) -> Self {
        Self::with_base_url(client, api_key, engine_id, DEFAULT_WEB_SEARCH_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: Option<String>,
        engine_id: Option<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            engine_id: engine_id.filter(|c| !c.trim().is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            results_per_query: MAX_RESULTS_PER_QUERY,
        }
    }

    pub fn with_results_per_query(mut self, results: u32) -> Self {
        self.results_per_query = results.clamp(1, MAX_RESULTS_PER_QUERY);
        self
    }

    fn search_url(&self) -> String {
        format!("{}/customsearch/v1", self.base_url)
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<Vec<EvidenceItem>, DomainError> {
        let response: SearchResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider(self.provider_name(), format!("Failed to parse response: {}", e))
        })?;

        Ok(response
            .items
            .into_iter()
            .filter(|item| !item.link.is_empty())
            .map(|item| {
                EvidenceItem::new(item.link, item.title, item.snippet, EvidenceOrigin::Search)
            })
            .collect())
    }
}

#[async_trait]
impl<C: HttpClientTrait + 'static> EvidenceProvider for GoogleSearchProvider<C> {
    async fn search(&self, query: &EvidenceQuery) -> Result<Vec<EvidenceItem>, DomainError> {
        let (Some(api_key), Some(engine_id)) = (&self.api_key, &self.engine_id) else {
            warn!(provider = self.provider_name(), "Web search credentials not configured");
            return Ok(Vec::new());
        };

        let params = [
            ("key", api_key.clone()),
            ("cx", engine_id.clone()),
            ("q", query.query.clone()),
            ("num", self.results_per_query.to_string()),
        ];

        let json = self
            .client
            .get_json(&self.search_url(), &params)
            .await
            .map_err(|e| match e {
                DomainError::Timeout { .. } => e,
                other => DomainError::provider(self.provider_name(), other.to_string()),
            })?;

        let items = self.parse_response(json)?;
        debug!(provider = self.provider_name(), results = items.len(), "Web search completed");

        Ok(items)
    }

    fn provider_name(&self) -> &'static str {
        "web_search"
    }

    fn origin(&self) -> EvidenceOrigin {
        EvidenceOrigin::Search
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.engine_id.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    link: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
}
