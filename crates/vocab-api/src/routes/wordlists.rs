use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use ts_rs::TS;
use vocab_db::types::{SaveWordListParams, Word};

use crate::error::AppError;
use crate::state::AppState;
use crate::validation;

const DEFAULT_USER_ID: &str = "default-user";

#[derive(Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CreateWordListRequest {
    name: String,
    words: Vec<Word>,
    #[ts(optional)]
    user_id: Option<String>,
}

#[derive(Deserialize)]
pub struct UserParams {
    #[serde(rename = "userId")]
    user_id: String,
}

/// POST /api/wordlists
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateWordListRequest>,
) -> Result<Json<Value>, AppError> {
    validation::require_non_empty(&body.name, "name")?;
    if body.words.is_empty() {
        return Err(AppError::BadRequest(
            "Provide at least one word".to_string(),
        ));
    }

    let params = SaveWordListParams {
        user_id: body.user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
        name: body.name.trim().to_string(),
        words: serde_json::to_value(&body.words).map_err(|e| AppError::Internal(e.to_string()))?,
    };

    let row = vocab_db::word_lists::save(&state.pool, &params).await?;
    info!(id = %row.id, name = %row.name, "Saved word list");

    Ok(Json(
        serde_json::to_value(&row).map_err(|e| AppError::Internal(e.to_string()))?,
    ))
}

/// GET /api/wordlists?userId=
pub async fn get_for_user(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> Result<Json<Value>, AppError> {
    let rows = vocab_db::word_lists::get_for_user(&state.pool, &params.user_id).await?;
    Ok(Json(json!({ "wordlists": rows })))
}

/// GET /api/wordlists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let row = vocab_db::word_lists::get_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Word list not found: {id}")))?;

    Ok(Json(
        serde_json::to_value(&row).map_err(|e| AppError::Internal(e.to_string()))?,
    ))
}
