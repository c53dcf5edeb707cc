//! Backend topology: the stand-alone recommendation endpoints.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::recommendation::service::Recommendation;
use crate::state::AppState;
use crate::wizard::profile::{clamp_hours, Profile};

/// GET /
pub async fn handle_root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Career & Salary Estimator API!"
    }))
}

/// POST /recommend
///
/// Always answers 200 with a `report`. A failed LLM call is folded into the report
/// text so the caller renders it like any other reply. Weekly hours are clamped
/// to the slider range before the prompt is built.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(mut profile): Json<Profile>,
) -> Json<Recommendation> {
    let hours = clamp_hours(i64::from(profile.time_commitment));
    if hours != profile.time_commitment {
        warn!(
            requested = profile.time_commitment,
            clamped = hours,
            "Time commitment out of range"
        );
        profile.time_commitment = hours;
    }

    match state.recommender.recommend(&profile).await {
        Ok(rec) => Json(rec),
        Err(e) => {
            error!(backend = state.recommender.backend(), "Recommendation failed: {e}");
            Json(Recommendation {
                report: e.to_string(),
            })
        }
    }
}
