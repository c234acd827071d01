pub mod cache;
pub mod health;
pub mod learning_records;
pub mod speech;
pub mod wordlists;
pub mod words;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::state::AppState;

/// Build the HTTP router over the shared state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health))
        // Word processing
        .route("/api/words/process", post(words::process))
        // Speech
        .route("/api/speech/generate", post(speech::generate))
        // Cache diagnostics
        .route("/api/cache/stats", get(cache::get_stats))
        .route("/api/cache", delete(cache::clear))
        // Word lists
        .route(
            "/api/wordlists",
            post(wordlists::create).get(wordlists::get_for_user),
        )
        .route("/api/wordlists/{id}", get(wordlists::get_by_id))
        // Learning records
        .route(
            "/api/learning-records",
            post(learning_records::create).get(learning_records::get_for_user),
        )
        .route(
            "/api/learning-records/review",
            get(learning_records::get_review_list),
        )
        .route(
            "/api/learning-records/{id}/increment",
            post(learning_records::increment),
        )
        .route(
            "/api/learning-records/{id}/review-status",
            post(learning_records::set_review_status),
        )
        .with_state(state)
}
