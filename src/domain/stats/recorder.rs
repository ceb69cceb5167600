//! Statistics recorder trait

use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;

use crate::domain::verdict::VerdictResult;
use crate::domain::DomainError;

/// Tally of one completed fact-check run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub claims: u64,
    pub likely_true: u64,
    pub likely_false: u64,
    pub degraded: u64,
}

impl RunSummary {
    pub fn from_results(results: &[VerdictResult]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            summary.claims += 1;
            if result.verdict.is_true() {
                summary.likely_true += 1;
            } else {
                summary.likely_false += 1;
            }
            if result.is_degraded() {
                summary.degraded += 1;
            }
            summary
        })
    }
}

/// Counters accumulated across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatsSnapshot {
    pub requests: u64,
    pub claims: u64,
    pub likely_true: u64,
    pub likely_false: u64,
    pub degraded: u64,
}

/// Records usage statistics.
///
/// Increments are fire-and-forget from the caller's point of view: a
/// failing recorder must never affect a verdict response.
#[async_trait]
pub trait StatsRecorder: Send + Sync + Debug {
    /// Record one successful run
    async fn record_run(&self, summary: RunSummary) -> Result<(), DomainError>;

    /// Current counter values
    async fn snapshot(&self) -> Result<StatsSnapshot, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Recorder that always fails
    #[derive(Debug, Default)]
    pub struct FailingStatsRecorder;

    #[async_trait]
    impl StatsRecorder for FailingStatsRecorder {
        async fn record_run(&self, _summary: RunSummary) -> Result<(), DomainError> {
            Err(DomainError::internal("stats store unavailable"))
        }

        async fn snapshot(&self) -> Result<StatsSnapshot, DomainError> {
            Err(DomainError::internal("stats store unavailable"))
        }
    }
}
