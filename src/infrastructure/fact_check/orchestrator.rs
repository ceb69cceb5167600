//! Fact-check orchestration
//!
//! Drives evidence retrieval, aggregation, red-flag detection and verdict
//! scoring for every claim of a request. Claims run concurrently on a
//! bounded pool; each is bounded by its own timeout and by the request
//! deadline. A claim that cannot be evaluated resolves through the
//! zero-evidence fallback instead of failing the request.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use tokio::time::{timeout_at, Instant as TokioInstant};
use tracing::{debug, error, info, warn};

use super::{EngineConfig, RequestPhase};
use crate::domain::claim::{build_search_query, validate_claims, Claim};
use crate::domain::credibility::CredibilityTable;
use crate::domain::evidence::{EvidenceAggregator, EvidenceQuery};
use crate::domain::red_flag::{RedFlagDetector, RedFlagReport};
use crate::domain::verdict::{DegradeReason, VerdictAggregator, VerdictConfig, VerdictResult};
use crate::domain::DomainError;
use crate::infrastructure::evidence::EvidenceGatherer;
use crate::infrastructure::observability::{record_fact_check_request, record_verdict};

/// Evaluates batches of claims into verdicts
#[derive(Debug, Clone)]
pub struct FactCheckOrchestrator {
    gatherer: Arc<EvidenceGatherer>,
    evidence: Arc<EvidenceAggregator>,
    red_flags: Arc<RedFlagDetector>,
    verdicts: Arc<VerdictAggregator>,
    config: EngineConfig,
}

impl FactCheckOrchestrator {
    pub fn new(
        gatherer: EvidenceGatherer,
        credibility: Arc<CredibilityTable>,
        verdict_config: VerdictConfig,
        config: EngineConfig,
    ) -> Self {
        Self {
            gatherer: Arc::new(gatherer),
            evidence: Arc::new(EvidenceAggregator::new(credibility, config.aggregation())),
            red_flags: Arc::new(RedFlagDetector::default()),
            verdicts: Arc::new(VerdictAggregator::new(verdict_config)),
            config,
        }
    }

    pub fn with_red_flag_detector(mut self, detector: RedFlagDetector) -> Self {
        self.red_flags = Arc::new(detector);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Names of evidence providers that have credentials
    pub fn configured_providers(&self) -> Vec<&'static str> {
        self.gatherer.configured_providers()
    }

    /// Evaluate every claim and return one result per input claim, in order.
    ///
    /// Only invalid input is an error; every other failure degrades the
    /// affected claim to the zero-evidence verdict.
    pub async fn check_claims(&self, claims: Vec<Claim>) -> Result<Vec<VerdictResult>, DomainError> {
        validate_claims(&claims, self.config.max_claim_chars)?;

        let started = Instant::now();
        let request_deadline = TokioInstant::now() + self.config.request_deadline();
        let mut phase = RequestPhase::Received;

        let (unique, positions) = dedupe_by_text(&claims);

        info!(
            claims = claims.len(),
            unique_claims = unique.len(),
            concurrency = self.config.max_concurrent_claims,
            "Fact-check request received"
        );

        phase = self.advance(phase)?;

        let evaluated: Vec<VerdictResult> = stream::iter(unique)
            .map(|claim| self.evaluate_with_deadline(claim, request_deadline))
            .buffered(self.config.max_concurrent_claims.max(1))
            .collect()
            .await;

        phase = self.advance(phase)?;

        let results: Vec<VerdictResult> = positions
            .into_iter()
            .map(|index| evaluated[index].clone())
            .collect();

        for result in &results {
            record_verdict(
                result.verdict.as_str(),
                result
                    .heuristic_analysis
                    .as_ref()
                    .map(|h| reason_label(h.reason)),
                result.confidence,
            );
        }
        record_fact_check_request(results.len(), started.elapsed());

        phase = self.advance(phase)?;

        info!(
            claims = results.len(),
            degraded = results.iter().filter(|r| r.is_degraded()).count(),
            duration_ms = started.elapsed().as_millis() as u64,
            phase = %phase,
            "Fact-check request completed"
        );

        Ok(results)
    }

    fn advance(&self, phase: RequestPhase) -> Result<RequestPhase, DomainError> {
        let next = phase.advance()?;
        debug!(from = %phase, to = %next, "Request phase transition");
        Ok(next)
    }

    /// Run one claim under the earlier of its own timeout and the request deadline
    async fn evaluate_with_deadline(&self, claim: Claim, request_deadline: TokioInstant) -> VerdictResult {
        let claim_deadline = TokioInstant::now() + self.config.claim_timeout();
        let deadline = claim_deadline.min(request_deadline);

        let this = self.clone();
        let task_claim = claim.clone();
        let mut handle = tokio::spawn(async move { this.evaluate_claim(&task_claim).await });

        match timeout_at(deadline, &mut handle).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                error!(claim = %claim.preview(80), error = %e, "Claim evaluation failed");
                self.fallback(&claim, DegradeReason::EvaluationFailed)
            }
            Err(_) => {
                handle.abort();

                let reason = if request_deadline <= claim_deadline {
                    DegradeReason::Cancelled
                } else {
                    DegradeReason::Timeout
                };

                warn!(
                    claim = %claim.preview(80),
                    reason = %reason,
                    "Claim evaluation did not finish in time"
                );
                self.fallback(&claim, reason)
            }
        }
    }

    async fn evaluate_claim(&self, claim: &Claim) -> VerdictResult {
        let query = EvidenceQuery::new(build_search_query(claim), &claim.text, &claim.language);
        debug!(query = %query.query, language = %query.language, "Gathering evidence");

        let gathered = self.gatherer.gather(&query).await;

        if gathered.all_failed() {
            error!(
                claim = %claim.preview(80),
                outcomes = ?gathered.outcomes,
                "Every evidence provider failed; using zero-evidence verdict"
            );
            return self.fallback(claim, DegradeReason::ProvidersUnavailable);
        }

        let evidence = self.evidence.aggregate(&claim.text, gathered.batches);

        let red_flags = if self.config.scan_evidence_snippets {
            self.red_flags.detect_with_evidence(claim, evidence.snippets())
        } else {
            self.red_flags.detect(claim)
        };

        let result = self.verdicts.decide(claim, &evidence, &red_flags);

        debug!(
            verdict = %result.verdict,
            confidence = result.confidence,
            sources = result.total_sources_found,
            red_flags = result.red_flags,
            "Claim evaluated"
        );

        result
    }

    fn fallback(&self, claim: &Claim, reason: DegradeReason) -> VerdictResult {
        let red_flags: RedFlagReport = self.red_flags.detect(claim);
        self.verdicts.fallback(claim, &red_flags, reason)
    }
}

/// Unique claims in first-seen order, plus the unique index for every input
fn dedupe_by_text(claims: &[Claim]) -> (Vec<Claim>, Vec<usize>) {
    let mut index_by_text: HashMap<&str, usize> = HashMap::new();
    let mut unique = Vec::new();
    let mut positions = Vec::with_capacity(claims.len());

    for claim in claims {
        let index = *index_by_text.entry(claim.text.as_str()).or_insert_with(|| {
            unique.push(claim.clone());
            unique.len() - 1
        });
        positions.push(index);
    }

    (unique, positions)
}

fn reason_label(reason: DegradeReason) -> &'static str {
    match reason {
        DegradeReason::Timeout => "timeout",
        DegradeReason::Cancelled => "cancelled",
        DegradeReason::ProvidersUnavailable => "providers_unavailable",
        DegradeReason::EvaluationFailed => "evaluation_failed",
    }
}
