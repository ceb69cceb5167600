//! Fact-check request and response wire types

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::claim::{
    Claim, Entity, Sentiment, DEFAULT_EXTRACTION_CONFIDENCE, DEFAULT_LANGUAGE,
};
use crate::domain::evidence::EvidenceItem;
use crate::domain::verdict::{HeuristicAnalysis, Verdict, VerdictResult};

/// Body of `POST /api/fact-check`
#[derive(Debug, Clone, Deserialize)]
pub struct FactCheckRequest {
    pub claims: Vec<ClaimPayload>,
}

/// Claim as supplied by the ingestion collaborator
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimPayload {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub entities: Vec<EntityPayload>,
    #[serde(default)]
    pub sentiment: Sentiment,
    /// Extraction confidence in [0, 1]
    #[serde(
        default = "default_extraction_confidence",
        alias = "extraction_confidence"
    )]
    pub confidence: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntityPayload {
    pub text: String,
    #[serde(rename = "type", default)]
    pub entity_type: String,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_extraction_confidence() -> f64 {
    DEFAULT_EXTRACTION_CONFIDENCE
}

impl From<EntityPayload> for Entity {
    fn from(payload: EntityPayload) -> Self {
        Entity::new(payload.text, payload.entity_type, payload.start, payload.end)
    }
}

impl From<ClaimPayload> for Claim {
    fn from(payload: ClaimPayload) -> Self {
        let language = if payload.language.trim().is_empty() {
            DEFAULT_LANGUAGE.to_string()
        } else {
            payload.language
        };

        Claim::new(payload.text)
            .with_language(language)
            .with_entities(payload.entities.into_iter().map(Entity::from).collect())
            .with_sentiment(payload.sentiment)
            .with_extraction_confidence(payload.confidence)
    }
}

/// Envelope returned for a completed run
#[derive(Debug, Clone, Serialize)]
pub struct FactCheckResponse {
    pub success: bool,
    pub results: Vec<VerdictResultResponse>,
}

impl FactCheckResponse {
    pub fn from_results(results: Vec<VerdictResult>) -> Self {
        Self {
            success: true,
            results: results
                .into_iter()
                .map(VerdictResultResponse::from)
                .collect(),
        }
    }
}

/// One claim's verdict in wire form
#[derive(Debug, Clone, Serialize)]
pub struct VerdictResultResponse {
    pub claim: String,
    pub verdict: Verdict,
    pub confidence: f64,
    pub explanation: String,
    pub sources: Vec<SourceResponse>,
    pub total_sources_found: usize,
    pub red_flags: u32,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heuristic_analysis: Option<HeuristicAnalysis>,
}

impl From<VerdictResult> for VerdictResultResponse {
    fn from(result: VerdictResult) -> Self {
        Self {
            claim: result.claim,
            verdict: result.verdict,
            confidence: result.confidence,
            explanation: result.explanation,
            sources: result.sources.into_iter().map(SourceResponse::from).collect(),
            total_sources_found: result.total_sources_found,
            red_flags: result.red_flags,
            timestamp: format_timestamp(&result.timestamp),
            heuristic_analysis: result.heuristic_analysis,
        }
    }
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceResponse {
    pub url: String,
    pub title: String,
    pub snippet: String,
    pub credibility: f64,
    pub source_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

impl From<EvidenceItem> for SourceResponse {
    fn from(item: EvidenceItem) -> Self {
        Self {
            url: item.url,
            title: item.title,
            snippet: item.snippet,
            credibility: item.credibility,
            source_name: item.source_name,
            rating: item.rating,
        }
    }
}
