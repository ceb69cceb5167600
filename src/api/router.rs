use axum::{
    http::{Method, Uri},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::endpoints;
use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::state::AppState;
use super::types::ApiError;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Fact-check API
        .nest("/api", endpoints::create_api_router())
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Any origin may call the API
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::api::middleware::REQUEST_ID_HEADER;
    use crate::api::state::mock::{state_with, MockFactCheckService};
    use crate::domain::credibility::CredibilityTable;
    use crate::domain::verdict::VerdictConfig;
    use crate::infrastructure::evidence::{EvidenceFixture, EvidenceGatherer};
    use crate::infrastructure::fact_check::{EngineConfig, FactCheckOrchestrator};
    use crate::infrastructure::stats::InMemoryStatsRecorder;

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn fixture_state() -> AppState {
        let fixture = EvidenceFixture::from_json(
            r#"{
                "search": {
                    "items": [
                        { "url": "https://www.reuters.com/science/boiling", "title": "Boiling point", "snippet": "Water boils at 100C at sea level" },
                        { "url": "https://apnews.com/article/water", "title": "Water facts", "snippet": "At sea level water boils at 100C" },
                        { "url": "https://www.bbc.com/news/science", "title": "Science", "snippet": "Boiling water at sea level" }
                    ]
                },
                "fact_check": { "fail": true }
            }"#,
        )
        .unwrap();

        let orchestrator = FactCheckOrchestrator::new(
            EvidenceGatherer::new(fixture.into_providers(), std::time::Duration::from_secs(1)),
            Arc::new(CredibilityTable::seeded()),
            VerdictConfig::default(),
            EngineConfig::default(),
        );

        AppState::new(Arc::new(orchestrator), Arc::new(InMemoryStatsRecorder::new()))
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_router(state_with(MockFactCheckService::new()));

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_live() {
        let app = create_router(state_with(MockFactCheckService::new()));

        let response = app.oneshot(get("/live")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_fact_check_end_to_end() {
        let app = create_router(fixture_state());

        let response = app
            .oneshot(post_json(
                "/api/fact-check",
                r#"{"claims":[{"text":"Water boils at 100C at sea level"},{"text":"Water boils at 100C at sea level"}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;

        assert_eq!(body["success"], true);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], results[1]);

        let first = &results[0];
        assert_eq!(first["verdict"], "LIKELY TRUE");
        assert_eq!(first["total_sources_found"], 3);
        assert_eq!(first["sources"][0]["source_name"], "reuters.com");
        assert_eq!(first["red_flags"], 0);
        assert!(first["confidence"].as_f64().unwrap() >= 50.0);
        assert!(first.get("heuristic_analysis").is_none());
    }

    #[tokio::test]
    async fn test_fact_check_rejects_empty_claims() {
        let app = create_router(fixture_state());

        let response = app
            .oneshot(post_json("/api/fact-check", r#"{"claims":[]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["type"], "invalid_request_error");
        assert_eq!(body["error"]["message"], "No claims provided");
    }

    #[tokio::test]
    async fn test_fact_check_rejects_oversized_claim() {
        let app = create_router(fixture_state());
        let body = serde_json::json!({ "claims": [{ "text": "a".repeat(10_001) }] }).to_string();

        let response = app
            .oneshot(post_json("/api/fact-check", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_format() {
        let app = create_router(state_with(MockFactCheckService::new()));

        let response = app
            .oneshot(post_json("/api/fact-check", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "json_parse_error");
    }

    #[tokio::test]
    async fn test_stats_reflect_completed_runs() {
        let state = state_with(MockFactCheckService::new());
        let app = create_router(state.clone());

        let response = app
            .clone()
            .oneshot(post_json("/api/fact-check", r#"{"claims":[{"text":"a"}]}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        let response = app.oneshot(get("/api/stats")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["requests"], 1);
        assert_eq!(body["likely_true"], 1);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_not_found() {
        let app = create_router(state_with(MockFactCheckService::new()));

        let response = app.oneshot(get("/v1/models")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["error"]["type"], "not_found_error");
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let app = create_router(state_with(MockFactCheckService::new()));
        let request = Request::builder()
            .uri("/live")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = create_router(state_with(MockFactCheckService::new()));
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/fact-check")
            .header(header::ORIGIN, "https://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
