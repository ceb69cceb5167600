//! API middleware components

pub mod logging;
pub mod metrics;

use axum::{body::Body, extract::MatchedPath, http::Request};

pub use logging::{logging_middleware, REQUEST_ID_HEADER};
pub use metrics::metrics_middleware;

/// Route template of the request, or the raw path when no route matched
fn route_path(request: &Request<Body>) -> Option<String> {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
}
