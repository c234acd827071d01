use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use ts_rs::TS;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ProcessWordsRequest {
    words: Vec<String>,
}

/// POST /api/words/process
pub async fn process(
    State(state): State<AppState>,
    Json(body): Json<ProcessWordsRequest>,
) -> Result<Json<Value>, AppError> {
    let words: Vec<String> = body
        .words
        .iter()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        return Err(AppError::BadRequest(
            "Provide at least one word".to_string(),
        ));
    }

    let processed = state
        .definitions
        .process_words(&words)
        .await
        .map_err(|e| AppError::Definition(e.to_string()))?;

    if processed.is_empty() {
        return Err(AppError::Definition(
            "no words could be processed".to_string(),
        ));
    }

    info!(
        requested = words.len(),
        processed = processed.len(),
        "Processed word list"
    );

    Ok(Json(json!({ "words": processed })))
}
