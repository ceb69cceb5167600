use async_trait::async_trait;
use std::time::Duration;

use crate::domain::DomainError;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// GET a JSON document with the given query parameters
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Client whose requests are bounded by `timeout` at the transport level
    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, DomainError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::timeout(format!("Request to {} timed out", url))
                } else {
                    DomainError::provider("http", format!("Request failed: {}", e.without_url()))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::provider(
                "http",
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| {
                DomainError::provider(
                    "http",
                    format!("Failed to parse response: {}", e.without_url()),
                )
            })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_json_sends_query_parameters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "moon landing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        let client = HttpClient::with_timeout(Duration::from_secs(2)).unwrap();
        let body = client
            .get_json(
                &format!("{}/search", server.uri()),
                &[("q", "moon landing".to_string())],
            )
            .await
            .unwrap();

        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn test_non_success_status_is_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let error = client
            .get_json(&format!("{}/search", server.uri()), &[])
            .await
            .unwrap_err();

        assert!(error.is_provider());
        assert!(error.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let error = HttpClient::new()
            .get_json(&server.uri(), &[])
            .await
            .unwrap_err();

        assert!(error.to_string().contains("Failed to parse response"));
    }

    #[tokio::test]
    async fn test_connection_error_does_not_expose_api_key() {
        let client = HttpClient::with_timeout(Duration::from_secs(2)).unwrap();
        let error = client
            .get_json(
                "http://127.0.0.1:1/customsearch/v1",
                &[("key", "SECRETKEY123".to_string())],
            )
            .await
            .unwrap_err();

        assert!(error.is_provider() || matches!(error, DomainError::Timeout { .. }));
        assert!(!error.to_string().contains("SECRETKEY123"));
    }

    #[tokio::test]
    async fn test_decode_error_does_not_expose_api_key() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let error = HttpClient::new()
            .get_json(
                &format!("{}/v1alpha1/claims:search", server.uri()),
                &[("key", "SECRETKEY123".to_string())],
            )
            .await
            .unwrap_err();

        assert!(error.to_string().contains("Failed to parse response"));
        assert!(!error.to_string().contains("SECRETKEY123"));
    }

    #[tokio::test]
    async fn test_slow_response_is_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = HttpClient::with_timeout(Duration::from_millis(50)).unwrap();
        let error = client.get_json(&server.uri(), &[]).await.unwrap_err();

        assert!(matches!(error, DomainError::Timeout { .. }));
    }
}
