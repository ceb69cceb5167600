//! HTTP wire types

pub mod error;
pub mod fact_check;
pub mod json;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use fact_check::{
    ClaimPayload, EntityPayload, FactCheckRequest, FactCheckResponse, SourceResponse,
    VerdictResultResponse,
};
pub use json::Json;
