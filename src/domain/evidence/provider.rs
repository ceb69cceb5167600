use async_trait::async_trait;
use std::fmt::Debug;

use super::{EvidenceItem, EvidenceOrigin};
use crate::domain::DomainError;

/// What an evidence provider is asked to search for
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceQuery {
    /// Condensed search query derived from the claim
    pub query: String,
    /// Full claim text
    pub claim_text: String,
    /// Language code of the claim
    pub language: String,
}

impl EvidenceQuery {
    pub fn new(
        query: impl Into<String>,
        claim_text: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            claim_text: claim_text.into(),
            language: language.into(),
        }
    }
}

/// Trait for evidence providers (web search, fact-check databases, fixtures)
///
/// Calls must be idempotent and free of side effects. Callers assume the
/// query text was validated upstream.
#[async_trait]
pub trait EvidenceProvider: Send + Sync + Debug {
    /// Search for evidence about a claim
    async fn search(&self, query: &EvidenceQuery) -> Result<Vec<EvidenceItem>, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Kind of evidence this provider returns
    fn origin(&self) -> EvidenceOrigin;

    /// Whether the provider has the credentials it needs
    fn is_configured(&self) -> bool {
        true
    }
}
