//! Verdict aggregation
//!
//! Collapses aggregated evidence, fact-checker stances and red flags into a
//! forced binary verdict with a confidence percentage.
//!
//! ```text
//! average  = mean credibility of every deduplicated source (or empty_credibility)
//! support  = 0.5 + 0.5 * min(1, total / evidence_saturation)
//! raw      = (cw * average + ew * support) / (cw + ew)
//!          + fact_check_weight * stance        (only when a rating exists)
//!          - red_flag_penalty * red_flags
//! verdict  = LIKELY TRUE iff raw > threshold
//! ```
//!
//! With no evidence and no flags the raw score equals the threshold exactly,
//! which resolves to LIKELY FALSE.

use chrono::Utc;
use serde::Serialize;

use super::{
    build_explanation, DegradeReason, ExplanationInputs, HeuristicAnalysis, Verdict, VerdictConfig,
    VerdictResult,
};
use crate::domain::claim::Claim;
use crate::domain::evidence::{AggregatedEvidence, StanceTally};
use crate::domain::red_flag::RedFlagReport;

/// Resolution raw scores are quantized to before comparison
const SCORE_RESOLUTION: f64 = 1e6;

/// Inputs of the pure scoring function
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreInputs {
    pub average_credibility: Option<f64>,
    pub total_sources_found: usize,
    pub red_flags: u32,
    pub stance: StanceTally,
}

impl ScoreInputs {
    pub fn from_evidence(evidence: &AggregatedEvidence, red_flags: u32) -> Self {
        Self {
            average_credibility: evidence.average_credibility(),
            total_sources_found: evidence.total_sources_found(),
            red_flags,
            stance: evidence.stance_tally(),
        }
    }
}

/// Intermediate and final values of one scoring run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VerdictScore {
    pub average_credibility: f64,
    pub evidence_signal: f64,
    pub raw: f64,
    pub verdict: Verdict,
    pub confidence: f64,
}

/// Deterministic decision core
#[derive(Debug, Clone, Default)]
pub struct VerdictAggregator {
    config: VerdictConfig,
}

impl VerdictAggregator {
    pub fn new(config: VerdictConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerdictConfig {
        &self.config
    }

    /// Score the inputs. Pure: identical inputs give identical output.
    pub fn score(&self, inputs: &ScoreInputs) -> VerdictScore {
        let config = &self.config;

        let average = inputs
            .average_credibility
            .unwrap_or(config.empty_credibility)
            .clamp(0.0, 1.0);

        let saturation = config.evidence_saturation.max(1) as f64;
        let evidence_signal = (inputs.total_sources_found as f64 / saturation).min(1.0);
        let support = 0.5 + 0.5 * evidence_signal;

        let weight_sum = config.credibility_weight + config.evidence_weight;
        let mut raw = if weight_sum > 0.0 {
            (config.credibility_weight * average + config.evidence_weight * support) / weight_sum
        } else {
            average
        };

        if let Some(balance) = inputs.stance.balance() {
            raw += config.fact_check_weight * balance;
        }

        raw -= config.red_flag_penalty * inputs.red_flags as f64;
        let raw = quantize(raw.clamp(0.0, 1.0));

        let verdict = if raw > config.threshold {
            Verdict::LikelyTrue
        } else {
            Verdict::LikelyFalse
        };

        VerdictScore {
            average_credibility: average,
            evidence_signal,
            raw,
            verdict,
            confidence: confidence(raw, config.threshold),
        }
    }

    /// Produce the verdict for a claim with gathered evidence
    pub fn decide(
        &self,
        claim: &Claim,
        evidence: &AggregatedEvidence,
        red_flags: &RedFlagReport,
    ) -> VerdictResult {
        let inputs = ScoreInputs::from_evidence(evidence, red_flags.count());
        let score = self.score(&inputs);

        let explanation = build_explanation(
            &self.config,
            &ExplanationInputs {
                verdict: score.verdict,
                confidence: score.confidence,
                total_sources_found: inputs.total_sources_found,
                average_credibility: inputs.average_credibility,
                red_flags: inputs.red_flags,
                stance: inputs.stance,
                degraded: None,
            },
        );

        VerdictResult {
            claim: claim.text.clone(),
            verdict: score.verdict,
            confidence: score.confidence,
            score: score.raw,
            explanation,
            sources: evidence.displayed().to_vec(),
            total_sources_found: inputs.total_sources_found,
            red_flags: inputs.red_flags,
            timestamp: Utc::now(),
            heuristic_analysis: None,
        }
    }

    /// Zero-evidence verdict used when a claim could not be evaluated
    pub fn fallback(
        &self,
        claim: &Claim,
        red_flags: &RedFlagReport,
        reason: DegradeReason,
    ) -> VerdictResult {
        let inputs = ScoreInputs {
            red_flags: red_flags.count(),
            ..Default::default()
        };
        let score = self.score(&inputs);

        let explanation = build_explanation(
            &self.config,
            &ExplanationInputs {
                verdict: score.verdict,
                confidence: score.confidence,
                total_sources_found: 0,
                average_credibility: None,
                red_flags: inputs.red_flags,
                stance: inputs.stance,
                degraded: Some(reason),
            },
        );

        VerdictResult {
            claim: claim.text.clone(),
            verdict: score.verdict,
            confidence: score.confidence,
            score: score.raw,
            explanation,
            sources: Vec::new(),
            total_sources_found: 0,
            red_flags: inputs.red_flags,
            timestamp: Utc::now(),
            heuristic_analysis: Some(HeuristicAnalysis::for_claim(claim, reason)),
        }
    }
}

fn quantize(value: f64) -> f64 {
    (value * SCORE_RESOLUTION).round() / SCORE_RESOLUTION
}

/// Distance from the threshold rescaled to [50, 100], one decimal place.
///
/// A score on the threshold is a coin flip (50); a score at either extreme
/// is certain (100) regardless of which label it produced.
fn confidence(raw: f64, threshold: f64) -> f64 {
    let certainty = if raw > threshold {
        (raw - threshold) / (1.0 - threshold)
    } else {
        (threshold - raw) / threshold
    };

    let percentage = 50.0 + 50.0 * certainty.clamp(0.0, 1.0);
    (percentage * 10.0).round() / 10.0
}
