//! Domain layer - Core business logic and entities

pub mod claim;
pub mod credibility;
pub mod error;
pub mod evidence;
pub mod red_flag;
pub mod stats;
pub mod verdict;

pub use claim::{validate_claims, Claim, ClaimValidationError, Entity, Sentiment};
pub use credibility::{CredibilityConfig, CredibilityTable};
pub use error::DomainError;
pub use evidence::{
    AggregatedEvidence, EvidenceAggregator, EvidenceItem, EvidenceOrigin, EvidenceProvider,
    EvidenceQuery,
};
pub use red_flag::{RedFlagDetector, RedFlagIndicator, RedFlagReport};
pub use stats::{RunSummary, StatsRecorder, StatsSnapshot};
pub use verdict::{DegradeReason, Verdict, VerdictAggregator, VerdictConfig, VerdictResult};
