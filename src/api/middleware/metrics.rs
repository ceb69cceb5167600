//! HTTP metrics middleware

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};

use super::route_path;
use crate::infrastructure::observability::record_http_request;

/// Label used for requests that matched no route
const UNMATCHED_PATH: &str = "unmatched";

/// Record count and latency of every request by route template
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = metrics_path(&request);

    let response = next.run(request).await;

    record_http_request(
        method.as_str(),
        &path,
        response.status().as_u16(),
        start.elapsed(),
    );

    response
}

/// Raw paths are never used as labels so that unknown URLs cannot grow
/// the series count
fn metrics_path(request: &Request<Body>) -> String {
    route_path(request).unwrap_or_else(|| UNMATCHED_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_requests_share_one_label() {
        let request = Request::builder()
            .uri("/random/123")
            .body(Body::empty())
            .unwrap();

        assert_eq!(metrics_path(&request), UNMATCHED_PATH);
    }
}
