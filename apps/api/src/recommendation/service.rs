//! Recommendation backends — pluggable, trait-based access to the report generator.
//!
//! `LlmRecommender` calls GroqCloud in-process. `RemoteRecommender` forwards the
//! profile to another instance's `POST /recommend`. `AppState` holds an
//! `Arc<dyn Recommender>`, picked at startup from `RECOMMENDER_URL`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::llm_client::prompts::SYSTEM_PROMPT;
use crate::llm_client::{LlmClient, LlmError};
use crate::recommendation::prompts::build_prompt;
use crate::report::shape::ReportShape;
use crate::wizard::profile::Profile;

pub const MISSING_API_KEY_REPORT: &str = "Error: GROQCLOUD_API_KEY not set in environment.";
const NO_REPORT: &str = "No report received.";

/// Body of `POST /recommend` responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub report: String,
}

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Error communicating with GroqCloud API: {0}")]
    Llm(#[from] LlmError),

    #[error("Failed to get recommendation from backend: {0}")]
    Remote(String),
}

/// The recommendation trait. Implement this to swap the transport without touching
/// the wizard handlers.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, profile: &Profile) -> Result<Recommendation, RecommendError>;

    /// Short label for logs: "groq" | "remote".
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmRecommender — in-process GroqCloud call
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmRecommender {
    /// `None` when no API key is configured.
    client: Option<LlmClient>,
    shape: ReportShape,
}

impl LlmRecommender {
    pub fn new(client: Option<LlmClient>, shape: ReportShape) -> Self {
        Self { client, shape }
    }
}

#[async_trait]
impl Recommender for LlmRecommender {
    async fn recommend(&self, profile: &Profile) -> Result<Recommendation, RecommendError> {
        // A missing key is reported in the report body so the page renders normally.
        let Some(client) = &self.client else {
            warn!("GROQCLOUD_API_KEY is not set; returning configuration error report");
            return Ok(Recommendation {
                report: MISSING_API_KEY_REPORT.to_string(),
            });
        };

        let prompt = build_prompt(profile, self.shape);
        let report = client.complete(&prompt, SYSTEM_PROMPT).await.map_err(|e| {
            error!("GroqCloud call failed: {e:?}");
            RecommendError::Llm(e)
        })?;

        info!(shape = %self.shape, chars = report.len(), "Recommendation generated");
        Ok(Recommendation { report })
    }

    fn backend(&self) -> &'static str {
        "groq"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RemoteRecommender — POST /recommend on a separate backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RemoteReply {
    report: Option<String>,
}

pub struct RemoteRecommender {
    client: Client,
    endpoint: String,
}

impl RemoteRecommender {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RecommendError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecommendError::Remote(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!("{}/recommend", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl Recommender for RemoteRecommender {
    async fn recommend(&self, profile: &Profile) -> Result<Recommendation, RecommendError> {
        let reply: RemoteReply = self
            .client
            .post(&self.endpoint)
            .json(profile)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| RecommendError::Remote(e.to_string()))?
            .json()
            .await
            .map_err(|e| RecommendError::Remote(e.to_string()))?;

        Ok(Recommendation {
            report: reply.report.unwrap_or_else(|| NO_REPORT.to_string()),
        })
    }

    fn backend(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::profile::sample_profile;

    #[tokio::test]
    async fn test_missing_key_returns_error_report() {
        let recommender = LlmRecommender::new(None, ReportShape::Minimal);
        let rec = recommender.recommend(&sample_profile()).await.unwrap();
        assert_eq!(rec.report, MISSING_API_KEY_REPORT);
        assert_eq!(recommender.backend(), "groq");
    }

    #[tokio::test]
    async fn test_unreachable_groq_is_an_llm_error() {
        let client = LlmClient::new(
            "test-key".to_string(),
            Some("http://127.0.0.1:9/v1/chat/completions".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();
        let recommender = LlmRecommender::new(Some(client), ReportShape::Minimal);
        let err = recommender.recommend(&sample_profile()).await.unwrap_err();
        assert!(matches!(err, RecommendError::Llm(_)));
        assert!(err.to_string().starts_with("Error communicating with GroqCloud API"));
    }

    #[tokio::test]
    async fn test_unreachable_remote_is_a_remote_error() {
        let recommender =
            RemoteRecommender::new("http://127.0.0.1:9/", Duration::from_secs(5)).unwrap();
        assert_eq!(recommender.endpoint, "http://127.0.0.1:9/recommend");
        let err = recommender.recommend(&sample_profile()).await.unwrap_err();
        assert!(matches!(err, RecommendError::Remote(_)));
    }

    #[test]
    fn test_remote_reply_without_report_field() {
        let reply: RemoteReply = serde_json::from_str("{}").unwrap();
        assert!(reply.report.is_none());
    }
}
