//! Verdict scoring configuration

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Weighting constants for the verdict score.
///
/// These are product-tuning parameters; the defaults are the reference
/// policy and are expected to be calibrated per deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictConfig {
    /// Weight of the average source credibility in the raw score
    #[serde(default = "default_credibility_weight")]
    pub credibility_weight: f64,
    /// Weight of the source-count signal in the raw score
    #[serde(default = "default_evidence_weight")]
    pub evidence_weight: f64,
    /// Source count at which the evidence signal saturates
    #[serde(default = "default_evidence_saturation")]
    pub evidence_saturation: usize,
    /// Average credibility assumed when nothing was found
    #[serde(default = "default_empty_credibility")]
    pub empty_credibility: f64,
    /// Score subtracted per red flag
    #[serde(default = "default_red_flag_penalty")]
    pub red_flag_penalty: f64,
    /// Score shift applied for a unanimous fact-checker stance
    #[serde(default = "default_fact_check_weight")]
    pub fact_check_weight: f64,
    /// Scores strictly above this are LIKELY TRUE
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Average credibility described as "highly credible"
    #[serde(default = "default_high_credibility")]
    pub high_credibility: f64,
    /// Average credibility described as "moderately credible"
    #[serde(default = "default_moderate_credibility")]
    pub moderate_credibility: f64,
}

fn default_credibility_weight() -> f64 {
    0.7
}

fn default_evidence_weight() -> f64 {
    0.3
}

fn default_evidence_saturation() -> usize {
    10
}

fn default_empty_credibility() -> f64 {
    0.5
}

fn default_red_flag_penalty() -> f64 {
    0.1
}

fn default_fact_check_weight() -> f64 {
    0.35
}

fn default_threshold() -> f64 {
    0.5
}

fn default_high_credibility() -> f64 {
    0.8
}

fn default_moderate_credibility() -> f64 {
    0.6
}

impl Default for VerdictConfig {
    fn default() -> Self {
        Self {
            credibility_weight: default_credibility_weight(),
            evidence_weight: default_evidence_weight(),
            evidence_saturation: default_evidence_saturation(),
            empty_credibility: default_empty_credibility(),
            red_flag_penalty: default_red_flag_penalty(),
            fact_check_weight: default_fact_check_weight(),
            threshold: default_threshold(),
            high_credibility: default_high_credibility(),
            moderate_credibility: default_moderate_credibility(),
        }
    }
}

impl VerdictConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the credibility / source-count split
    pub fn with_weights(mut self, credibility: f64, evidence: f64) -> Self {
        self.credibility_weight = credibility.max(0.0);
        self.evidence_weight = evidence.max(0.0);
        self
    }

    pub fn with_evidence_saturation(mut self, saturation: usize) -> Self {
        self.evidence_saturation = saturation.max(1);
        self
    }

    pub fn with_empty_credibility(mut self, credibility: f64) -> Self {
        self.empty_credibility = credibility.clamp(0.0, 1.0);
        self
    }

    pub fn with_red_flag_penalty(mut self, penalty: f64) -> Self {
        self.red_flag_penalty = penalty.clamp(0.0, 1.0);
        self
    }

    pub fn with_fact_check_weight(mut self, weight: f64) -> Self {
        self.fact_check_weight = weight.clamp(0.0, 1.0);
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Check the configuration can produce a score in [0, 1]
    pub fn validate(&self) -> Result<(), DomainError> {
        let weights = [
            ("credibility_weight", self.credibility_weight),
            ("evidence_weight", self.evidence_weight),
            ("red_flag_penalty", self.red_flag_penalty),
            ("fact_check_weight", self.fact_check_weight),
        ];

        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::configuration(format!(
                    "verdict.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.credibility_weight + self.evidence_weight <= 0.0 {
            return Err(DomainError::configuration(
                "verdict.credibility_weight and verdict.evidence_weight cannot both be zero",
            ));
        }

        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(DomainError::configuration(format!(
                "verdict.threshold must be strictly between 0 and 1, got {}",
                self.threshold
            )));
        }

        if self.evidence_saturation == 0 {
            return Err(DomainError::configuration(
                "verdict.evidence_saturation must be at least 1",
            ));
        }

        for (name, value) in [
            ("empty_credibility", self.empty_credibility),
            ("high_credibility", self.high_credibility),
            ("moderate_credibility", self.moderate_credibility),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DomainError::configuration(format!(
                    "verdict.{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.moderate_credibility > self.high_credibility {
            return Err(DomainError::configuration(
                "verdict.moderate_credibility cannot exceed verdict.high_credibility",
            ));
        }

        Ok(())
    }
}
