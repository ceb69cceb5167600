//! Claim domain - Claims handed to the engine by the ingestion collaborator

mod entity;
mod query;
mod validation;

pub use entity::{
    Claim, Entity, Sentiment, Span, DEFAULT_EXTRACTION_CONFIDENCE, DEFAULT_LANGUAGE,
};
pub use query::build_search_query;
pub use validation::{
    validate_claim_text, validate_claims, ClaimValidationError, MAX_CLAIM_CHARS,
};
