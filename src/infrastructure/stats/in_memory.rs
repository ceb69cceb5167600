//! In-memory statistics recorder

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::domain::stats::{RunSummary, StatsRecorder, StatsSnapshot};
use crate::domain::DomainError;

/// Process-local counters; reset on restart
#[derive(Debug, Default)]
pub struct InMemoryStatsRecorder {
    requests: AtomicU64,
    claims: AtomicU64,
    likely_true: AtomicU64,
    likely_false: AtomicU64,
    degraded: AtomicU64,
}

impl InMemoryStatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatsRecorder for InMemoryStatsRecorder {
    async fn record_run(&self, summary: RunSummary) -> Result<(), DomainError> {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.claims.fetch_add(summary.claims, Ordering::Relaxed);
        self.likely_true.fetch_add(summary.likely_true, Ordering::Relaxed);
        self.likely_false.fetch_add(summary.likely_false, Ordering::Relaxed);
        self.degraded.fetch_add(summary.degraded, Ordering::Relaxed);
        Ok(())
    }

    async fn snapshot(&self) -> Result<StatsSnapshot, DomainError> {
        Ok(StatsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            claims: self.claims.load(Ordering::Relaxed),
            likely_true: self.likely_true.load(Ordering::Relaxed),
            likely_false: self.likely_false.load(Ordering::Relaxed),
            degraded: self.degraded.load(Ordering::Relaxed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_records_runs() {
        let recorder = InMemoryStatsRecorder::new();

        recorder
            .record_run(RunSummary {
                claims: 3,
                likely_true: 1,
                likely_false: 2,
                degraded: 1,
            })
            .await
            .unwrap();

        let snapshot = recorder.snapshot().await.unwrap();
        assert_eq!(snapshot.requests, 1);
        assert_eq!(snapshot.claims, 3);
        assert_eq!(snapshot.likely_true, 1);
        assert_eq!(snapshot.likely_false, 2);
        assert_eq!(snapshot.degraded, 1);
    }

    #[tokio::test]
    async fn test_concurrent_increments() {
        let recorder = Arc::new(InMemoryStatsRecorder::new());

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let recorder = recorder.clone();
                tokio::spawn(async move {
                    recorder
                        .record_run(RunSummary {
                            claims: 2,
                            likely_true: 2,
                            ..Default::default()
                        })
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let snapshot = recorder.snapshot().await.unwrap();
        assert_eq!(snapshot.requests, 50);
        assert_eq!(snapshot.claims, 100);
    }
}
