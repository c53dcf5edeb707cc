pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::recommendation::handlers as recommendation;
use crate::state::AppState;
use crate::wizard::handlers as wizard;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Recommendation backend
        .route("/", get(recommendation::handle_root))
        .route("/health", get(health::health_handler))
        .route("/recommend", post(recommendation::handle_recommend))
        // Questionnaire sessions
        .route("/api/v1/sessions", post(wizard::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(wizard::handle_get_session).delete(wizard::handle_destroy_session),
        )
        .route("/api/v1/sessions/:id/reset", post(wizard::handle_reset))
        .route("/api/v1/sessions/:id/steps", post(wizard::handle_submit_step))
        .route(
            "/api/v1/sessions/:id/tech/toggle",
            post(wizard::handle_toggle_tech),
        )
        .route(
            "/api/v1/sessions/:id/tech/search",
            post(wizard::handle_add_search),
        )
        .route(
            "/api/v1/sessions/:id/tech/search/:item",
            delete(wizard::handle_remove_search),
        )
        .route("/api/v1/sessions/:id/report", get(wizard::handle_get_report))
        .with_state(state)
}
