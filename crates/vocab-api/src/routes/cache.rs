//! Cache diagnostics: aggregate statistics and full invalidation.
//!
//! These act on the same directory as the speech orchestrator but go through
//! the injected cache handle, never the filesystem directly.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/cache/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let stats = state.cache.stats().await?;

    Ok(Json(json!({
        "cache_dir": state.cache.dir().display().to_string(),
        "file_count": stats.file_count,
        "total_size_bytes": stats.total_size_bytes,
        "total_size_mb": stats.total_size_mb,
        "oldest_file_time": stats.oldest_entry,
        "newest_file_time": stats.newest_entry,
    })))
}

/// DELETE /api/cache
pub async fn clear(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let removed = state.cache.clear_all().await?;
    info!(removed, "Cleared audio cache");

    Ok(Json(json!({ "removed_count": removed })))
}
