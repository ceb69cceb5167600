//! Evidence domain - Evidence items, providers and aggregation

mod aggregator;
mod item;
mod provider;
mod rating;

pub use aggregator::{
    AggregatedEvidence, AggregationConfig, EvidenceAggregator, DEFAULT_DISPLAY_LIMIT,
};
pub use item::{EvidenceItem, EvidenceOrigin};
pub use provider::{EvidenceProvider, EvidenceQuery};
pub use rating::{RatingStance, StanceTally};

#[cfg(test)]
pub use provider::mock::MockEvidenceProvider;
