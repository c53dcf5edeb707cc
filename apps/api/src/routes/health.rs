use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a fixed status object.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
