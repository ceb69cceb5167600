//! Fact-checker rating interpretation

use serde::{Deserialize, Serialize};

const REFUTING_TERMS: &[&str] = &[
    "false",
    "wrong",
    "incorrect",
    "fake",
    "misleading",
    "pants on fire",
    "fabricated",
    "not true",
    "inaccurate",
];

const SUPPORTING_TERMS: &[&str] = &["true", "correct", "accurate"];

/// Position a fact-checker's textual rating takes on a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingStance {
    Supports,
    Refutes,
    Unrated,
}

impl RatingStance {
    /// Classify a free-text rating such as "Mostly False" or "Correct".
    ///
    /// Refuting terms win over supporting ones so "not true" and
    /// "half true, mostly false" both refute.
    pub fn classify(rating: &str) -> Self {
        let rating = rating.trim().to_lowercase();

        if rating.is_empty() {
            return Self::Unrated;
        }

        if REFUTING_TERMS.iter().any(|t| rating.contains(t)) {
            Self::Refutes
        } else if SUPPORTING_TERMS.iter().any(|t| rating.contains(t)) {
            Self::Supports
        } else {
            Self::Unrated
        }
    }
}

/// Tally of fact-checker stances across an evidence set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StanceTally {
    pub supports: usize,
    pub refutes: usize,
}

impl StanceTally {
    pub fn add(&mut self, stance: RatingStance) {
        match stance {
            RatingStance::Supports => self.supports += 1,
            RatingStance::Refutes => self.refutes += 1,
            RatingStance::Unrated => {}
        }
    }

    pub fn rated(&self) -> usize {
        self.supports + self.refutes
    }

    /// Net stance in [-1, 1]; `None` when nothing was rated
    pub fn balance(&self) -> Option<f64> {
        if self.rated() == 0 {
            return None;
        }

        Some((self.supports as f64 - self.refutes as f64) / self.rated() as f64)
    }
}
