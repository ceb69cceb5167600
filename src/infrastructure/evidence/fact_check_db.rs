//! Google Fact Check Tools evidence provider

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::http_client::HttpClientTrait;
use crate::domain::evidence::{EvidenceItem, EvidenceOrigin, EvidenceProvider, EvidenceQuery};
use crate::domain::DomainError;

pub const DEFAULT_FACT_CHECK_BASE_URL: &str = "https://factchecktools.googleapis.com";

/// Curated fact-check database search over the Fact Check Tools API
#[derive(Debug)]
pub struct GoogleFactCheckProvider<C: HttpClientTrait> {
    client: C,
    api_key: Option<String>,
    base_url: String,
    language_code: Option<String>,
}

impl<C: HttpClientTrait + 'static> GoogleFactCheckProvider<C> {
    pub fn new(client: C, api_key: Option<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_FACT_CHECK_BASE_URL)
    }

    pub fn with_base_url(client: C, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language_code: None,
        }
    }

    /// Force a language code instead of using the claim's language
    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        let code = language_code.into();
        self.language_code = (!code.trim().is_empty()).then_some(code);
        self
    }

    fn search_url(&self) -> String {
        format!("{}/v1alpha1/claims:search", self.base_url)
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<Vec<EvidenceItem>, DomainError> {
        let response: ClaimSearchResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider(self.provider_name(), format!("Failed to parse response: {}", e))
        })?;

        Ok(response
            .claims
            .into_iter()
            .filter_map(|claim| {
                let review = claim.claim_review.into_iter().next()?;
                Some(review_to_item(claim.text, review))
            })
            .collect())
    }
}

fn review_to_item(claim_text: Option<String>, review: ClaimReview) -> EvidenceItem {
    let title = match (claim_text, review.title) {
        (Some(text), _) if !text.trim().is_empty() => format!("Fact Check: {}", text),
        (_, Some(title)) if !title.trim().is_empty() => title,
        _ => "Fact Check".to_string(),
    };

    let rating = review.textual_rating.unwrap_or_default();
    let publisher = review.publisher.unwrap_or_default();

    let mut item = EvidenceItem::new(
        review.url,
        title,
        format!("Rating: {}", rating),
        EvidenceOrigin::FactCheckDb,
    )
    .with_source_name(publisher.name.unwrap_or_else(|| "Fact Checker".to_string()));

    if let Some(site) = publisher.site {
        item = item.with_source_domain(&site);
    }

    if !rating.trim().is_empty() {
        item = item.with_rating(rating);
    }

    item
}

#[async_trait]
impl<C: HttpClientTrait + 'static> EvidenceProvider for GoogleFactCheckProvider<C> {
    async fn search(&self, query: &EvidenceQuery) -> Result<Vec<EvidenceItem>, DomainError> {
        let Some(api_key) = &self.api_key else {
            warn!(provider = self.provider_name(), "Fact-check credentials not configured");
            return Ok(Vec::new());
        };

        let language_code = self
            .language_code
            .clone()
            .unwrap_or_else(|| query.language.clone());

        let params = [
            ("key", api_key.clone()),
            ("query", query.query.clone()),
            ("languageCode", language_code),
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
        debug!(provider = self.provider_name(), results = items.len(), "Fact-check search completed");

        Ok(items)
    }

    fn provider_name(&self) -> &'static str {
        "fact_check"
    }

    fn origin(&self) -> EvidenceOrigin {
        EvidenceOrigin::FactCheckDb
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct ClaimSearchResponse {
    #[serde(default)]
    claims: Vec<FactCheckedClaim>,
}

#[derive(Debug, Deserialize)]
struct FactCheckedClaim {
    #[serde(default)]
    text: Option<String>,
    #[serde(default, rename = "claimReview")]
    claim_review: Vec<ClaimReview>,
}

#[derive(Debug, Deserialize)]
struct ClaimReview {
    #[serde(default)]
    url: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "textualRating")]
    textual_rating: Option<String>,
    #[serde(default)]
    publisher: Option<Publisher>,
}

#[derive(Debug, Default, Deserialize)]
struct Publisher {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    site: Option<String>,
}
