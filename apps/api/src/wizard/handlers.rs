//! Axum route handlers for the questionnaire sessions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::report::render::{render_report, ReportView};
use crate::state::AppState;
use crate::wizard::profile::{Profile, ProfileDraft};
use crate::wizard::session::Session;
use crate::wizard::state::{StepInput, StepOutcome, WizardError};
use crate::wizard::steps::{prompt_for, StepPrompt, TOTAL_STEPS};
use crate::wizard::tech::TechSelection;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub current_step: u8,
    pub total_steps: u8,
    pub progress: f32,
    pub complete: bool,
    /// The screen to show next; absent once the results screen is reached.
    pub prompt: Option<StepPrompt>,
    pub profile: ProfileDraft,
    pub tech_selection: TechSelection,
}

impl From<Session> for SessionView {
    fn from(session: Session) -> Self {
        let wizard = session.wizard;
        Self {
            session_id: session.id,
            created_at: session.created_at,
            current_step: wizard.current_step(),
            total_steps: TOTAL_STEPS,
            progress: wizard.progress(),
            complete: wizard.is_complete(),
            prompt: prompt_for(wizard.current_step()),
            profile: wizard.profile().clone(),
            tech_selection: wizard.tech().clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StepResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<StepOutcome>,
    /// Set when the step was re-shown instead of advancing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub session: SessionView,
}

#[derive(Debug, Deserialize)]
pub struct TechItemRequest {
    pub item: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub item: String,
    pub selected: bool,
    pub session: SessionView,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub profile: Profile,
    pub report: ReportView,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let session = state.sessions.create().await;
    info!(session_id = %session.id, "Questionnaire started");
    (StatusCode::CREATED, Json(session.into()))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(session.into()))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_destroy_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.destroy(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// POST /api/v1/sessions/:id/reset
///
/// "Start Over": back to step 1 with an empty profile, from any step.
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let ((), session) = state
        .sessions
        .update(id, |w| w.reset())
        .await
        .ok_or_else(|| session_not_found(id))?;
    info!(session_id = %id, "Questionnaire reset");
    Ok(Json(session.into()))
}

/// POST /api/v1/sessions/:id/steps
///
/// Submits the current step's answer. An empty technical-knowledge selection is
/// not an error: the step is re-shown with a warning.
pub async fn handle_submit_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<StepInput>,
) -> Result<Json<StepResponse>, AppError> {
    let (result, session) = state
        .sessions
        .update(id, |w| w.submit(input))
        .await
        .ok_or_else(|| session_not_found(id))?;

    match result {
        Ok(outcome) => Ok(Json(StepResponse {
            outcome: Some(outcome),
            warning: None,
            session: session.into(),
        })),
        Err(e @ WizardError::EmptyTechSelection) => {
            warn!(session_id = %id, "Step 3 submitted with no languages selected");
            Ok(Json(StepResponse {
                outcome: None,
                warning: Some(e.to_string()),
                session: session.into(),
            }))
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /api/v1/sessions/:id/tech/toggle
pub async fn handle_toggle_tech(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TechItemRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let (result, session) = state
        .sessions
        .update(id, |w| w.toggle_popular(&req.item))
        .await
        .ok_or_else(|| session_not_found(id))?;
    let selected = result?;
    Ok(Json(ToggleResponse {
        item: req.item,
        selected,
        session: session.into(),
    }))
}

/// POST /api/v1/sessions/:id/tech/search
pub async fn handle_add_search(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TechItemRequest>,
) -> Result<Json<SessionView>, AppError> {
    let (result, session) = state
        .sessions
        .update(id, |w| w.add_search(&req.item))
        .await
        .ok_or_else(|| session_not_found(id))?;
    result?;
    Ok(Json(session.into()))
}

/// DELETE /api/v1/sessions/:id/tech/search/:item
pub async fn handle_remove_search(
    State(state): State<AppState>,
    Path((id, item)): Path<(Uuid, String)>,
) -> Result<Json<SessionView>, AppError> {
    let (result, session) = state
        .sessions
        .update(id, |w| w.remove_search(&item))
        .await
        .ok_or_else(|| session_not_found(id))?;
    if !result? {
        return Err(AppError::NotFound(format!("'{item}' is not selected")));
    }
    Ok(Json(session.into()))
}

/// GET /api/v1/sessions/:id/report
///
/// Results screen: sends the finished profile to the recommender and renders the
/// reply. Recommendation failures are shown in the report, never as an HTTP error.
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportResponse>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;

    if !session.wizard.is_complete() {
        return Err(AppError::Conflict(format!(
            "Report is available after step {TOTAL_STEPS}; session is on step {}",
            session.wizard.current_step()
        )));
    }
    let profile = session
        .wizard
        .profile()
        .complete()
        .ok_or_else(|| AppError::Conflict("Profile is incomplete".to_string()))?;

    let shape = state.config.report_shape;
    let outcome = state
        .recommender
        .recommend(&profile)
        .await
        .map(|rec| rec.report)
        .map_err(|e| {
            warn!(
                session_id = %id,
                backend = state.recommender.backend(),
                "Recommendation failed: {e}"
            );
            e.to_string()
        });

    let report = render_report(shape, outcome, &state.config.course_catalog_url);
    if report.missing_sections.is_empty() {
        info!(session_id = %id, sections = report.sections.len(), "Report rendered");
    } else {
        warn!(
            session_id = %id,
            found = ?report.sections.titles().collect::<Vec<_>>(),
            missing = ?report.missing_sections,
            "Reply is missing required sections"
        );
    }

    Ok(Json(ReportResponse { profile, report }))
}
