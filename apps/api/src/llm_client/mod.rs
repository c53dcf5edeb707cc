/// LLM Client — the single point of entry for all GroqCloud calls.
///
/// ARCHITECTURAL RULE: No other module may call the chat-completions API directly.
/// All LLM interactions MUST go through this module.
///
/// Model and sampling parameters are hardcoded so every report is produced the same way.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for every recommendation.
pub const MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
const TEMPERATURE: f32 = 0.7;
const MAX_COMPLETION_TOKENS: u32 = 800;
const TOP_P: f32 = 1.0;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("Failed to build HTTP client: {0}")]
    Build(reqwest::Error),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_completion_tokens: u32,
    top_p: f32,
    stream: bool,
    stop: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl LlmResponse {
    /// Text of the first choice, if the model returned any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Wraps the OpenAI-compatible GroqCloud chat-completions endpoint.
///
/// One attempt per call, bounded by the configured timeout; failures go straight
/// back to the caller.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl LlmClient {
    pub fn new(
        api_key: String,
        api_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LlmError::Build)?;
        Ok(Self {
            client,
            api_key,
            api_url: api_url.unwrap_or_else(|| GROQ_API_URL.to_string()),
        })
    }

    /// Makes a raw, non-streaming chat completion call.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_completion_tokens: MAX_COMPLETION_TOKENS,
            top_p: TOP_P,
            stream: false,
            stop: None,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(llm_response)
    }

    /// Calls the model and returns the reply text.
    pub async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, system).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_fixed_sampling_parameters() {
        let req = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            temperature: TEMPERATURE,
            max_completion_tokens: MAX_COMPLETION_TOKENS,
            top_p: TOP_P,
            stream: false,
            stop: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], MODEL);
        assert_eq!(json["max_completion_tokens"], 800);
        assert_eq!(json["top_p"], 1.0);
        assert_eq!(json["stream"], false);
        assert!(json["stop"].is_null());
    }

    #[test]
    fn test_response_text_first_choice() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "Dream Job:\nDev"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14}
        }"#;
        let resp: LlmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.text(), Some("Dream Job:\nDev"));
    }

    #[test]
    fn test_response_text_empty() {
        let json = r#"{"choices": [{"message": {"content": "  "}}]}"#;
        let resp: LlmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.text(), None);

        let resp: LlmResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(resp.text(), None);
    }

    #[test]
    fn test_api_error_envelope() {
        let body = r#"{"error": {"message": "Invalid API Key", "type": "invalid_request_error"}}"#;
        let parsed: ApiErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Invalid API Key");
    }

    #[test]
    fn test_new_defaults_to_groq_endpoint() {
        let client = LlmClient::new("key".to_string(), None, Duration::from_secs(5)).unwrap();
        assert_eq!(client.api_url, GROQ_API_URL);

        let client = LlmClient::new(
            "key".to_string(),
            Some("http://127.0.0.1:9/v1/chat/completions".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.api_url, "http://127.0.0.1:9/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        let client = LlmClient::new(
            "key".to_string(),
            Some("http://127.0.0.1:9/v1/chat/completions".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();
        let err = client.complete("hi", "sys").await.unwrap_err();
        assert!(matches!(err, LlmError::Http(_)));
    }
}
