//! Request lifecycle

use std::fmt;

use crate::domain::DomainError;

/// Phase of one fact-check request.
///
/// `Received → PerClaimEvaluating → Aggregating → Completed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Received,
    PerClaimEvaluating,
    Aggregating,
    Completed,
}

impl RequestPhase {
    /// The only phase that may follow this one
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Received => Some(Self::PerClaimEvaluating),
            Self::PerClaimEvaluating => Some(Self::Aggregating),
            Self::Aggregating => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// Move to the following phase
    pub fn advance(self) -> Result<Self, DomainError> {
        self.next().ok_or_else(|| {
            DomainError::internal(format!("request phase {} has no successor", self))
        })
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for RequestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Received => write!(f, "received"),
            Self::PerClaimEvaluating => write!(f, "per_claim_evaluating"),
            Self::Aggregating => write!(f, "aggregating"),
            Self::Completed => write!(f, "completed"),
        }
    }
}
