use crate::domain::ports::ModelClient;
use crate::utils::error::{PlannerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// ModelClient backed by the Gemini generateContent REST API.
///
/// The base URL is configurable so tests can point the client at a
/// mock server. The credential is injected at construction, never read
/// from the environment here.
pub struct GeminiClient {
    client: Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_base: &str, model: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn call(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!("POST {} ({} char prompt)", self.endpoint(), prompt.len());
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("API error status {}: {}", status, body);
            return Err(PlannerError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(PlannerError::ApiStatus {
                status: status.as_u16(),
                body: "response contained no candidate text".to_string(),
            });
        }

        tracing::debug!("Model returned {} chars", text.len());
        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_call_returns_candidate_text() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-2.0-flash:generateContent")
                .header("x-goog-api-key", "test-key")
                .json_body_partial(
                    r#"{"contents": [{"parts": [{"text": "say hi"}]}]}"#,
                );
            then.status(200).json_body(serde_json::json!({
                "candidates": [
                    {"content": {"parts": [{"text": "{\"goal\": "}, {"text": "\"hi\"}"}]}}
                ]
            }));
        });

        let client = GeminiClient::new(&server.base_url(), DEFAULT_MODEL, "test-key");
        let text = client.call("say hi").await.unwrap();

        mock.assert();
        // multi-part candidates are concatenated
        assert_eq!(text, "{\"goal\": \"hi\"}");
    }

    #[tokio::test]
    async fn test_quota_error_surfaces_status_and_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path_contains(":generateContent");
            then.status(429).body("rate limit exceeded");
        });

        let client = GeminiClient::new(&server.base_url(), DEFAULT_MODEL, "test-key");
        let err = client.call("prompt").await.unwrap_err();
        match err {
            PlannerError::ApiStatus { status, body } => {
                assert_eq!(status, 429);
                assert!(body.contains("rate limit"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_candidates_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path_contains(":generateContent");
            then.status(200).json_body(serde_json::json!({"candidates": []}));
        });

        let client = GeminiClient::new(&server.base_url(), DEFAULT_MODEL, "test-key");
        assert!(client.call("prompt").await.is_err());
    }

    #[test]
    fn test_endpoint_normalizes_trailing_slash() {
        let client = GeminiClient::new("http://localhost:9999/", DEFAULT_MODEL, "k");
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
