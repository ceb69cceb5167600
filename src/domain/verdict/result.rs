//! Verdict result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::claim::{Claim, Sentiment};
use crate::domain::evidence::EvidenceItem;

/// Forced binary truth label. There is deliberately no third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "LIKELY TRUE")]
    LikelyTrue,
    #[serde(rename = "LIKELY FALSE")]
    LikelyFalse,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LikelyTrue => "LIKELY TRUE",
            Self::LikelyFalse => "LIKELY FALSE",
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Self::LikelyTrue)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a claim resolved through the zero-evidence fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradeReason {
    /// The per-claim timeout elapsed
    Timeout,
    /// The request deadline cancelled the evaluation
    Cancelled,
    /// Every evidence provider failed
    ProvidersUnavailable,
    /// The evaluation task itself failed
    EvaluationFailed,
}

impl std::fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "evaluation timed out"),
            Self::Cancelled => write!(f, "request deadline exceeded"),
            Self::ProvidersUnavailable => write!(f, "all evidence providers failed"),
            Self::EvaluationFailed => write!(f, "evaluation failed"),
        }
    }
}

/// Text-only signals attached to degraded results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicAnalysis {
    pub reason: DegradeReason,
    pub has_numbers: bool,
    pub has_entities: bool,
    pub sentiment: Sentiment,
}

impl HeuristicAnalysis {
    pub fn for_claim(claim: &Claim, reason: DegradeReason) -> Self {
        Self {
            reason,
            has_numbers: claim.has_numbers(),
            has_entities: claim.has_entities(),
            sentiment: claim.sentiment,
        }
    }
}

/// Outcome of evaluating one claim.
///
/// Created once per claim per request and never reused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerdictResult {
    pub claim: String,
    pub verdict: Verdict,
    /// Certainty of the verdict in [50, 100], one decimal place
    pub confidence: f64,
    /// Final raw score in [0, 1] the verdict was derived from
    pub score: f64,
    pub explanation: String,
    /// Highest-credibility sources, at most the display limit
    pub sources: Vec<EvidenceItem>,
    /// Deduplicated source count before truncation
    pub total_sources_found: usize,
    pub red_flags: u32,
    pub timestamp: DateTime<Utc>,
    /// Present only when the claim was resolved without evidence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heuristic_analysis: Option<HeuristicAnalysis>,
}

impl VerdictResult {
    /// Whether the result came from the zero-evidence fallback
    pub fn is_degraded(&self) -> bool {
        self.heuristic_analysis.is_some()
    }
}
