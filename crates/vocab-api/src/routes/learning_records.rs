use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use ts_rs::TS;
use vocab_db::types::UpsertLearningRecordParams;

use crate::error::AppError;
use crate::state::AppState;
use crate::validation;

const DEFAULT_USER_ID: &str = "default-user";

#[derive(Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SaveLearningRecordRequest {
    word: String,
    #[ts(optional)]
    user_id: Option<String>,
    #[serde(default)]
    add_to_review_list: bool,
}

#[derive(Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ReviewStatusRequest {
    #[ts(optional)]
    user_id: Option<String>,
    add_to_review_list: bool,
}

#[derive(Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct IncrementRequest {
    #[ts(optional)]
    user_id: Option<String>,
}

#[derive(Deserialize)]
pub struct UserParams {
    #[serde(rename = "userId")]
    user_id: String,
}

/// POST /api/learning-records
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<SaveLearningRecordRequest>,
) -> Result<Json<Value>, AppError> {
    validation::require_non_empty(&body.word, "word")?;

    let params = UpsertLearningRecordParams {
        user_id: body.user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
        word: body.word.trim().to_string(),
        in_review_list: body.add_to_review_list,
    };

    let row = vocab_db::learning_records::upsert(&state.pool, &params).await?;
    info!(id = %row.id, word = %row.word, "Saved learning record");

    Ok(Json(
        serde_json::to_value(&row).map_err(|e| AppError::Internal(e.to_string()))?,
    ))
}

/// GET /api/learning-records?userId=
pub async fn get_for_user(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> Result<Json<Value>, AppError> {
    let rows = vocab_db::learning_records::get_for_user(&state.pool, &params.user_id).await?;
    Ok(Json(json!({ "records": rows })))
}

/// GET /api/learning-records/review?userId=
pub async fn get_review_list(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> Result<Json<Value>, AppError> {
    let rows = vocab_db::learning_records::get_review_list(&state.pool, &params.user_id).await?;
    Ok(Json(json!({ "records": rows })))
}

/// POST /api/learning-records/{id}/increment
pub async fn increment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<IncrementRequest>,
) -> Result<Json<Value>, AppError> {
    let user_id = body.user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    let row = vocab_db::learning_records::increment_review_count(&state.pool, &id, &user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Learning record not found: {id}")))?;

    Ok(Json(
        serde_json::to_value(&row).map_err(|e| AppError::Internal(e.to_string()))?,
    ))
}

/// POST /api/learning-records/{id}/review-status
pub async fn set_review_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ReviewStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let user_id = body.user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    let row = vocab_db::learning_records::set_review_status(
        &state.pool,
        &id,
        &user_id,
        body.add_to_review_list,
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Learning record not found: {id}")))?;

    Ok(Json(
        serde_json::to_value(&row).map_err(|e| AppError::Internal(e.to_string()))?,
    ))
}
