//! Anthropic Messages client used by `LlmDiagnoser`.
//!
//! Only built when `AI_PROVIDER=anthropic`. Errors are returned to the diagnoser,
//! which answers with the template generator instead; nothing here becomes a 500.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;
#[cfg(test)]
pub(crate) mod stub_server;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";
/// Model behind every diagnosis.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 2048;
/// Attempts per call, including the first.
const MAX_ATTEMPTS: u32 = 2;
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("draft is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned no text block")]
    EmptyContent,
}

impl LlmError {
    /// Rate limits, overloads and dropped connections are worth a second try.
    fn is_transient(&self) -> bool {
        match self {
            LlmError::Http(e) => e.is_timeout() || e.is_connect(),
            LlmError::Api { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || *status >= 500
            }
            LlmError::Parse(_) | LlmError::EmptyContent => false,
        }
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [UserTurn<'a>; 1],
}

#[derive(Debug, Serialize)]
struct UserTurn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl MessagesResponse {
    pub fn first_text(&self) -> Option<&str> {
        self.content
            .iter()
            .filter(|b| b.kind == "text")
            .find_map(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl LlmClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            http: Client::builder().timeout(timeout).build()?,
            api_key,
            endpoint: messages_endpoint(DEFAULT_BASE_URL),
        })
    }

    /// Points the client at another host serving the Messages API (proxies, local stubs).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.endpoint = messages_endpoint(base_url);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One completion, retried once after a transient failure.
    pub async fn complete(&self, prompt: &str, system: &str) -> Result<MessagesResponse, LlmError> {
        let request = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [UserTurn {
                role: "user",
                content: prompt,
            }],
        };

        let mut attempt = 1;
        loop {
            match self.send(&request).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_transient() && attempt < MAX_ATTEMPTS => {
                    warn!("LLM attempt {attempt} failed ({e}), retrying in {RETRY_BACKOFF:?}");
                    tokio::time::sleep(RETRY_BACKOFF).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Completes and parses the first text block as `T`, tolerating a code fence.
    pub async fn complete_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let response = self.complete(prompt, system).await?;
        let text = response.first_text().ok_or(LlmError::EmptyContent)?;
        Ok(serde_json::from_str(strip_code_fence(text))?)
    }

    async fn send(&self, request: &MessagesRequest<'_>) -> Result<MessagesResponse, LlmError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: MessagesResponse = response.json().await?;
        if let Some(usage) = &parsed.usage {
            debug!(
                "LLM call done: input_tokens={} output_tokens={}",
                usage.input_tokens, usage.output_tokens
            );
        }
        Ok(parsed)
    }
}

fn messages_endpoint(base_url: &str) -> String {
    format!("{}/v1/messages", base_url.trim_end_matches('/'))
}

/// Drops a surrounding ``` or ```json fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode as StubStatus;
    use serde_json::Value;

    use crate::llm_client::stub_server::{messages_body, spawn_stub};

    fn client(base_url: &str) -> LlmClient {
        LlmClient::new("test-key".to_string(), Duration::from_secs(5))
            .unwrap()
            .with_base_url(base_url)
    }

    #[test]
    fn test_strip_code_fence_variants() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn test_first_text_skips_non_text_blocks() {
        let json = r#"{
            "content": [
                {"type": "thinking"},
                {"type": "text", "text": "{\"verdict\": \"信息过载\"}"}
            ]
        }"#;
        let response: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("{\"verdict\": \"信息过载\"}"));
        assert!(response.usage.is_none());
    }

    #[test]
    fn test_base_url_builds_messages_endpoint() {
        let llm = client("http://127.0.0.1:9999/");
        assert_eq!(llm.endpoint(), "http://127.0.0.1:9999/v1/messages");
        let default = LlmClient::new("k".to_string(), Duration::from_secs(1)).unwrap();
        assert_eq!(default.endpoint(), "https://api.anthropic.com/v1/messages");
    }

    #[tokio::test]
    async fn test_complete_json_parses_fenced_text() {
        let stub = spawn_stub(StubStatus::OK, messages_body("```json\n{\"ok\": true}\n```")).await;
        let value: Value = client(&stub.base_url).complete_json("p", "s").await.unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(stub.hits(), 1);
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let body = r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#;
        let stub = spawn_stub(StubStatus::UNAUTHORIZED, body.to_string()).await;
        let err = client(&stub.base_url).complete("p", "s").await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid x-api-key");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(stub.hits(), 1);
    }

    #[tokio::test]
    async fn test_overload_is_retried_once() {
        let stub = spawn_stub(StubStatus::SERVICE_UNAVAILABLE, "overloaded".to_string()).await;
        let err = client(&stub.base_url).complete("p", "s").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
        assert_eq!(stub.hits(), MAX_ATTEMPTS as usize);
    }

    #[tokio::test]
    async fn test_missing_text_block_is_empty_content() {
        let stub = spawn_stub(StubStatus::OK, r#"{"content": []}"#.to_string()).await;
        let err = client(&stub.base_url)
            .complete_json::<Value>("p", "s")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }
}
