//! Evidence aggregation
//!
//! Merges the per-provider evidence lists for one claim into a single
//! deduplicated set ranked by source credibility.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{EvidenceItem, EvidenceOrigin, StanceTally};
use crate::domain::credibility::CredibilityTable;

/// Number of evidence items exposed in a verdict
pub const DEFAULT_DISPLAY_LIMIT: usize = 5;

/// Words ignored when measuring claim/snippet overlap
const COMMON_WORDS: &[&str] = &["the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for"];

/// Aggregation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Maximum items exposed to callers
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
    /// Search results below this relevance are discarded (0 keeps all)
    #[serde(default)]
    pub min_relevance: f64,
}

fn default_display_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            display_limit: default_display_limit(),
            min_relevance: 0.0,
        }
    }
}

/// Deduplicated evidence for one claim, sorted by credibility descending
#[derive(Debug, Clone)]
pub struct AggregatedEvidence {
    items: Vec<EvidenceItem>,
    display_limit: usize,
}

impl AggregatedEvidence {
    /// Evidence set with nothing found
    pub fn empty(display_limit: usize) -> Self {
        Self {
            items: Vec::new(),
            display_limit,
        }
    }

    /// Deduplicated count before truncation
    pub fn total_sources_found(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every deduplicated item, best first
    pub fn all(&self) -> &[EvidenceItem] {
        &self.items
    }

    /// The items exposed to callers, capped at the display limit
    pub fn displayed(&self) -> &[EvidenceItem] {
        let end = self.items.len().min(self.display_limit);
        &self.items[..end]
    }

    /// Mean credibility over the full deduplicated set
    pub fn average_credibility(&self) -> Option<f64> {
        if self.items.is_empty() {
            return None;
        }

        let sum: f64 = self.items.iter().map(|i| i.credibility).sum();
        Some(sum / self.items.len() as f64)
    }

    /// Fact-checker stances across the full set
    pub fn stance_tally(&self) -> StanceTally {
        let mut tally = StanceTally::default();
        for item in &self.items {
            tally.add(item.stance());
        }
        tally
    }

    /// Snippets of every item, used for optional red-flag scanning
    pub fn snippets(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.snippet.as_str())
    }
}

/// Merges, deduplicates and ranks evidence across providers
#[derive(Debug, Clone)]
pub struct EvidenceAggregator {
    credibility: Arc<CredibilityTable>,
    config: AggregationConfig,
}

impl EvidenceAggregator {
    pub fn new(credibility: Arc<CredibilityTable>, config: AggregationConfig) -> Self {
        Self {
            credibility,
            config,
        }
    }

    pub fn with_defaults(credibility: Arc<CredibilityTable>) -> Self {
        Self::new(credibility, AggregationConfig::default())
    }

    pub fn display_limit(&self) -> usize {
        self.config.display_limit
    }

    /// Aggregate evidence lists (one per provider, in provider order).
    ///
    /// The first occurrence of a (domain, URL) pair wins. Ties in
    /// credibility keep their insertion order.
    pub fn aggregate(&self, claim_text: &str, batches: Vec<Vec<EvidenceItem>>) -> AggregatedEvidence {
        let claim_words = significant_words(claim_text);
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for mut item in batches.into_iter().flatten() {
            if item.retrieved_from == EvidenceOrigin::Search {
                let relevance = jaccard(&claim_words, &format!("{} {}", item.snippet, item.title));

                if relevance < self.config.min_relevance {
                    continue;
                }
                item.relevance = Some(relevance);
            }

            if !seen.insert(item.dedup_key()) {
                continue;
            }

            item.credibility = self.credibility.lookup(&item.source_domain);
            items.push(item);
        }

        // sort_by is stable, so equal credibility keeps insertion order
        items.sort_by(|a, b| b.credibility.total_cmp(&a.credibility));

        AggregatedEvidence {
            items,
            display_limit: self.config.display_limit,
        }
    }
}

fn significant_words(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| !COMMON_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Jaccard similarity between the claim's words and a candidate text
fn jaccard(claim_words: &HashSet<String>, text: &str) -> f64 {
    if claim_words.is_empty() {
        return 0.0;
    }

    let text_words = significant_words(text);
    let intersection = claim_words.intersection(&text_words).count();
    let union = claim_words.union(&text_words).count();

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
