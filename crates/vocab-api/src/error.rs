use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application error type that converts to HTTP responses
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    /// The speech synthesis backend failed or returned no audio
    Synthesis(String),
    /// The definition backend failed or returned nothing usable
    Definition(String),
    /// Audio cache I/O failure on an explicit cache operation (stats/clear)
    Cache(String),
    Internal(String),
    Database(sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Synthesis(msg) => {
                tracing::error!(error = %msg, "Speech synthesis failed");
                (StatusCode::BAD_GATEWAY, "Speech synthesis failed".into())
            }
            AppError::Definition(msg) => {
                tracing::error!(error = %msg, "Word processing failed");
                (StatusCode::BAD_GATEWAY, "Word processing failed".into())
            }
            AppError::Cache(msg) => {
                tracing::error!(error = %msg, "Audio cache error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Audio cache error".into())
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Cache(e.to_string())
    }
}
