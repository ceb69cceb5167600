//! Evidence item types

use serde::{Deserialize, Serialize};

use super::RatingStance;
use crate::domain::credibility::normalize_domain;

/// Kind of provider an evidence item was retrieved from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvidenceOrigin {
    #[serde(rename = "search")]
    Search,
    #[serde(rename = "factcheck-db")]
    FactCheckDb,
}

impl EvidenceOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::FactCheckDb => "factcheck-db",
        }
    }
}

impl std::fmt::Display for EvidenceOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One piece of external material about a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub url: String,
    pub title: String,
    pub snippet: String,
    /// Normalized domain derived from the URL
    pub source_domain: String,
    /// Display name of the publisher
    pub source_name: String,
    /// Trust weight in [0, 1], attached during aggregation
    pub credibility: f64,
    pub retrieved_from: EvidenceOrigin,
    /// Textual rating given by a fact-checker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// Word-overlap relevance to the claim, attached during aggregation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
}

impl EvidenceItem {
    /// Create an item; the source name defaults to the normalized domain
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        snippet: impl Into<String>,
        retrieved_from: EvidenceOrigin,
    ) -> Self {
        let url = url.into();
        let source_domain = normalize_domain(&url);

        Self {
            source_name: source_domain.clone(),
            url,
            title: title.into(),
            snippet: snippet.into(),
            source_domain,
            credibility: 0.0,
            retrieved_from,
            rating: None,
            relevance: None,
        }
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.source_name = name;
        }
        self
    }

    /// Override the domain used for credibility lookup
    pub fn with_source_domain(mut self, domain: &str) -> Self {
        let domain = normalize_domain(domain);
        if !domain.is_empty() {
            self.source_domain = domain;
        }
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_credibility(mut self, credibility: f64) -> Self {
        self.credibility = credibility.clamp(0.0, 1.0);
        self
    }

    /// Stance implied by the fact-check rating, if any
    pub fn stance(&self) -> RatingStance {
        self.rating
            .as_deref()
            .map(RatingStance::classify)
            .unwrap_or(RatingStance::Unrated)
    }

    /// Key used to detect the same source reported twice
    pub fn dedup_key(&self) -> String {
        let url = normalize_url(&self.url);

        if url.is_empty() {
            format!("{}|{}", self.source_domain, self.title.trim().to_lowercase())
        } else {
            format!("{}|{}", self.source_domain, url)
        }
    }
}

/// Normalize a URL for duplicate detection: host lower-cased without `www.`,
/// scheme, fragment and trailing slash removed, path case preserved
fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    let without_scheme = trimmed
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(trimmed);
    let without_fragment = without_scheme.split('#').next().unwrap_or_default();

    let (host, rest) = match without_fragment.find(['/', '?']) {
        Some(idx) => without_fragment.split_at(idx),
        None => (without_fragment, ""),
    };

    let host = host.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    let rest = rest.trim_end_matches('/');

    format!("{}{}", host, rest)
}
