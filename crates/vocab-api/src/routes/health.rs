use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let cache = state.cache.stats().await?;
    let uptime_secs = (Utc::now() - state.started_at).num_seconds();

    Ok(Json(json!({
        "status": "ok",
        "uptime_secs": uptime_secs,
        "cache": cache,
    })))
}
