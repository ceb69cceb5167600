//! Claim validation utilities

use std::fmt;

use super::Claim;
use crate::domain::DomainError;

/// Maximum number of characters accepted for a single claim
pub const MAX_CLAIM_CHARS: usize = 10_000;

/// Claim validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimValidationError {
    /// No claims were supplied
    EmptyBatch,
    /// Claim text is empty or whitespace only
    EmptyText { index: usize },
    /// Claim text exceeds the maximum length
    TextTooLong { index: usize, length: usize, max: usize },
}

impl fmt::Display for ClaimValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBatch => write!(f, "No claims provided"),
            Self::EmptyText { index } => write!(f, "Claim {} has empty text", index + 1),
            Self::TextTooLong { index, length, max } => write!(
                f,
                "Claim {} too long: {} characters (max {})",
                index + 1,
                length,
                max
            ),
        }
    }
}

impl std::error::Error for ClaimValidationError {}

impl From<ClaimValidationError> for DomainError {
    fn from(err: ClaimValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Validate a single claim's text
pub fn validate_claim_text(
    index: usize,
    text: &str,
    max_chars: usize,
) -> Result<(), ClaimValidationError> {
    if text.trim().is_empty() {
        return Err(ClaimValidationError::EmptyText { index });
    }

    let length = text.chars().count();

    if length > max_chars {
        return Err(ClaimValidationError::TextTooLong {
            index,
            length,
            max: max_chars,
        });
    }

    Ok(())
}

/// Validate a batch of claims before it reaches the engine
pub fn validate_claims(claims: &[Claim], max_chars: usize) -> Result<(), ClaimValidationError> {
    if claims.is_empty() {
        return Err(ClaimValidationError::EmptyBatch);
    }

    for (index, claim) in claims.iter().enumerate() {
        validate_claim_text(index, &claim.text, max_chars)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_claims() {
        let claims = vec![Claim::new("Water boils at 100 degrees Celsius")];
        assert!(validate_claims(&claims, MAX_CLAIM_CHARS).is_ok());
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(
            validate_claims(&[], MAX_CLAIM_CHARS),
            Err(ClaimValidationError::EmptyBatch)
        );
    }

    #[test]
    fn test_blank_claim_text() {
        let claims = vec![Claim::new("valid claim"), Claim::new("   \n")];
        let err = validate_claims(&claims, MAX_CLAIM_CHARS).unwrap_err();

        assert_eq!(err, ClaimValidationError::EmptyText { index: 1 });
        assert_eq!(err.to_string(), "Claim 2 has empty text");
    }

    #[test]
    fn test_claim_too_long() {
        let text = "a".repeat(MAX_CLAIM_CHARS + 1);
        let err = validate_claim_text(0, &text, MAX_CLAIM_CHARS).unwrap_err();

        assert!(matches!(
            err,
            ClaimValidationError::TextTooLong { length: 10_001, max: 10_000, .. }
        ));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let text = "é".repeat(MAX_CLAIM_CHARS);
        assert!(validate_claim_text(0, &text, MAX_CLAIM_CHARS).is_ok());
    }

    #[test]
    fn test_converts_to_domain_validation_error() {
        let err: DomainError = ClaimValidationError::EmptyBatch.into();
        assert!(matches!(err, DomainError::Validation { .. }));
    }
}
