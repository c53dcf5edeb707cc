mod config;
mod errors;
mod llm_client;
mod recommendation;
mod report;
mod routes;
mod state;
mod wizard;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::recommendation::service::{LlmRecommender, Recommender, RemoteRecommender};
use crate::routes::build_router;
use crate::state::AppState;
use crate::wizard::session::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career & Salary Estimator API v{}", env!("CARGO_PKG_VERSION"));

    let recommender = build_recommender(&config)?;
    info!(
        "Recommender initialized (backend: {}, report shape: {})",
        recommender.backend(),
        config.report_shape
    );

    let state = AppState {
        sessions: SessionStore::new(),
        recommender,
        config: config.clone(),
    };

    // The original backend accepted requests from any origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Remote backend when `RECOMMENDER_URL` is set, otherwise an in-process Groq call.
fn build_recommender(config: &Config) -> Result<Arc<dyn Recommender>> {
    let timeout = Duration::from_secs(config.llm_timeout_secs);

    if let Some(url) = &config.recommender_url {
        info!("Forwarding recommendations to {url}/recommend");
        return Ok(Arc::new(RemoteRecommender::new(url, timeout)?));
    }

    let client = match &config.groq_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(LlmClient::new(key.clone(), config.groq_api_url.clone(), timeout)?)
        }
        None => {
            warn!("GROQCLOUD_API_KEY is not set; reports will carry a configuration error");
            None
        }
    };

    Ok(Arc::new(LlmRecommender::new(client, config.report_shape)))
}
