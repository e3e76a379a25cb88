//! Ollama backend client
//!
//! One non-streaming `POST /api/generate` per call.

use async_trait::async_trait;
use reqwest::Client;
use resolver_application::{BackendClient, BackendError};
use resolver_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// HTTP client for an Ollama server shared by every model
#[derive(Clone)]
pub struct OllamaBackendClient {
    client: Client,
    base_url: String,
}

impl OllamaBackendClient {
    /// Create a client for `base_url` (e.g. `http://localhost:11434`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[async_trait]
impl BackendClient for OllamaBackendClient {
    async fn complete(
        &self,
        model: &Model,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, BackendError> {
        let request = GenerateRequest {
            model: model.as_str(),
            prompt,
            stream: false,
        };

        debug!("Calling {} via {}", model, self.base_url);
        let started = Instant::now();

        let response = self
            .client
            .post(self.generate_url())
            .timeout(timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::timeout(model, timeout)
                } else {
                    BackendError::new(model, format!("request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            info!("{} answered HTTP {} after {:.2?}", model, status, started.elapsed());
            return Err(BackendError::new(
                model,
                format!("HTTP {}: {}", status.as_u16(), body.trim()),
            ));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| BackendError::new(model, format!("invalid response body: {}", e)))?;

        info!("{} answered in {:.2?}", model, started.elapsed());
        Ok(body.response.trim().to_string())
    }
}

impl std::fmt::Debug for OllamaBackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaBackendClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_successful_generate_is_trimmed() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .match_body(Matcher::Json(json!({
                "model": "tinyllama",
                "prompt": "What color is the sky?",
                "stream": false
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"model":"tinyllama","response":"  Blue.\n","done":true}"#)
            .create_async()
            .await;

        let client = OllamaBackendClient::new(server.url());
        let text = client
            .complete(&Model::new("tinyllama"), "What color is the sky?", TIMEOUT)
            .await
            .unwrap();

        assert_eq!(text, "Blue.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/generate")
            .with_status(404)
            .with_body(r#"{"error":"model 'phi9' not found"}"#)
            .create_async()
            .await;

        let client = OllamaBackendClient::new(server.url());
        let err = client
            .complete(&Model::new("phi9"), "hi", TIMEOUT)
            .await
            .unwrap_err();

        assert_eq!(err.model, Model::new("phi9"));
        assert!(err.reason.starts_with("HTTP 404"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_body(r#"{"unexpected": true}"#)
            .create_async()
            .await;

        let client = OllamaBackendClient::new(server.url());
        let err = client
            .complete(&Model::new("tinyllama"), "hi", TIMEOUT)
            .await
            .unwrap_err();

        assert!(err.reason.contains("invalid response body"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_failure() {
        // Nothing listens on port 1
        let client = OllamaBackendClient::new("http://127.0.0.1:1");
        let result = client
            .complete(&Model::new("tinyllama"), "hi", TIMEOUT)
            .await;
        assert!(result.is_err());
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let client = OllamaBackendClient::new("http://localhost:11434/");
        assert_eq!(client.generate_url(), "http://localhost:11434/api/generate");
    }
}
