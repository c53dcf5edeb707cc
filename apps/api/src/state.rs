use std::sync::Arc;

use crate::config::Config;
use crate::recommendation::service::Recommender;
use crate::wizard::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable recommendation backend. Default: in-process Groq. Swap via RECOMMENDER_URL.
    pub recommender: Arc<dyn Recommender>,
    pub config: Config,
}
