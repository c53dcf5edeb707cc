use anyhow::{Context, Result};

use crate::report::shape::ReportShape;

const DEFAULT_COURSE_CATALOG_URL: &str = "https://www.ccbp.in/intensive";

/// Application configuration loaded from environment variables.
///
/// Nothing here is required: a missing `GROQCLOUD_API_KEY` is reported inside the
/// generated report rather than failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    /// Overrides the Groq chat-completions endpoint (used to point at a local stub).
    pub groq_api_url: Option<String>,
    /// When set, the wizard calls `POST {recommender_url}/recommend` instead of Groq directly.
    pub recommender_url: Option<String>,
    pub report_shape: ReportShape,
    pub llm_timeout_secs: u64,
    pub course_catalog_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQCLOUD_API_KEY"),
            groq_api_url: optional_env("GROQ_API_URL"),
            recommender_url: optional_env("RECOMMENDER_URL"),
            report_shape: optional_env("REPORT_SHAPE")
                .map(|s| s.parse::<ReportShape>())
                .transpose()
                .map_err(anyhow::Error::msg)
                .context("REPORT_SHAPE must be one of: minimal, structured, structured_alt")?
                .unwrap_or_default(),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            course_catalog_url: optional_env("COURSE_CATALOG_URL")
                .unwrap_or_else(|| DEFAULT_COURSE_CATALOG_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    /// In-process configuration with no API key, used by handler tests.
    pub fn for_tests(report_shape: ReportShape) -> Self {
        Config {
            groq_api_key: None,
            groq_api_url: None,
            recommender_url: None,
            report_shape,
            llm_timeout_secs: 60,
            course_catalog_url: DEFAULT_COURSE_CATALOG_URL.to_string(),
            port: 0,
            rust_log: "info".to_string(),
        }
    }
}
