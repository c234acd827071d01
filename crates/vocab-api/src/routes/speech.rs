use axum::extract::State;
use axum::Json;
use base64::Engine;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use ts_rs::TS;

use crate::error::AppError;
use crate::state::AppState;
use crate::validation;

#[derive(Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GenerateSpeechRequest {
    text: String,
}

/// POST /api/speech/generate
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateSpeechRequest>,
) -> Result<Json<Value>, AppError> {
    validation::require_non_empty(&body.text, "text")?;

    let audio = state
        .speech
        .generate(&body.text)
        .await
        .map_err(|e| AppError::Synthesis(e.to_string()))?;

    info!(
        size = audio.bytes.len(),
        cached = audio.cached,
        "Serving speech audio"
    );

    let encoded = base64::engine::general_purpose::STANDARD.encode(&audio.bytes);
    Ok(Json(json!({
        "audio": encoded,
        "format": "mp3",
        "cached": audio.cached,
    })))
}
