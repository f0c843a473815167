//! LLM Client: the single point of entry for all Claude API calls in the drafter.
//!
//! ARCHITECTURAL RULE: the prompt engine never talks to the model. Assembled
//! prompts are handed to this module by the drafting service.
//!
//! Model: claude-sonnet-4-5 (hardcoded, not configurable)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all drafting calls.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 8192;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of a conversation sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Text produced by the model for one call.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: Usage,
}

/// Anything that can turn a system prompt plus conversation into text.
/// `LlmClient` is the production implementation.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<Completion, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

impl AnthropicResponse {
    /// Concatenates every text block; long drafts may arrive split.
    fn text(&self) -> Option<String> {
        let text: String = self
            .content
            .iter()
            .filter(|b| b.block_type == "text")
            .filter_map(|b| b.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Wraps the Anthropic Messages API with retry logic.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
        })
    }

    /// Makes a call to the Claude API.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<Completion, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message: api_error_message(body),
                });
            }

            let parsed: AnthropicResponse = response.json().await?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                parsed.usage.input_tokens, parsed.usage.output_tokens
            );

            let text = parsed.text().ok_or(LlmError::EmptyContent)?;
            return Ok(Completion {
                text,
                usage: parsed.usage,
            });
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<Completion, LlmError> {
        self.call(system, messages).await
    }
}

/// Pulls `error.message` out of an Anthropic error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<AnthropicError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_conversation_roles() {
        let messages = vec![
            ChatMessage::user("Qual o prazo da contestação?"),
            ChatMessage {
                role: Role::Assistant,
                content: "Quinze dias úteis.".to_string(),
            },
        ];
        let body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system: "sistema",
            messages: &messages,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["system"], "sistema");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][1]["role"], "assistant");
        assert_eq!(json["messages"][1]["content"], "Quinze dias úteis.");
    }

    #[test]
    fn test_response_text_joins_text_blocks() {
        let response: AnthropicResponse = serde_json::from_value(serde_json::json!({
            "content": [
                {"type": "text", "text": "EXCELENTÍSSIMO "},
                {"type": "tool_use"},
                {"type": "text", "text": "SENHOR JUIZ"}
            ],
            "usage": {"input_tokens": 10, "output_tokens": 4}
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("EXCELENTÍSSIMO SENHOR JUIZ"));
        assert_eq!(response.usage.output_tokens, 4);
    }

    #[test]
    fn test_response_without_text_is_none() {
        let response: AnthropicResponse = serde_json::from_value(serde_json::json!({
            "content": [],
            "usage": {"input_tokens": 10, "output_tokens": 0}
        }))
        .unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_api_error_message_extraction() {
        let body = r#"{"type":"error","error":{"type":"invalid_request_error","message":"max_tokens too large"}}"#;
        assert_eq!(api_error_message(body.to_string()), "max_tokens too large");
        assert_eq!(api_error_message("gateway down".to_string()), "gateway down");
    }
}
