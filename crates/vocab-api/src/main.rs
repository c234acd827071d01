//! Vocabulary backend API
//!
//! Turns word lists into bilingual study material via the definition backend,
//! synthesizes pronunciation audio behind a content-addressed on-disk cache,
//! and persists word lists and learning records in Postgres.

mod config;
mod definitions;
mod error;
mod routes;
mod speech;
mod state;
mod validation;

use std::sync::Arc;

use audio_cache::AudioCache;
use axum::http::{header, Method};
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

use config::Config;
use definitions::DefinitionClient;
use speech::{HttpSpeechBackend, SpeechService};
use state::AppState;

#[tokio::main]
async fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "vocab_api=info".into());

    // Use JSON format for cloud log aggregation when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = Config::from_env();
    info!(
        port = config.port,
        cache_dir = %config.cache_dir.display(),
        "Starting vocab-api"
    );

    // Connect to database and apply schema
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    vocab_db::migrate::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    // One cache handle for the process lifetime, directory created up front
    let cache = AudioCache::new(config.cache_dir.clone());
    cache
        .init()
        .await
        .expect("Failed to create cache directory");

    let backend = Arc::new(HttpSpeechBackend::new(
        &config.synthesis_api_url,
        &config.tts_voice,
        &config.tts_engine,
    ));

    let state = AppState {
        pool,
        cache: cache.clone(),
        speech: Arc::new(SpeechService::new(cache, backend)),
        definitions: Arc::new(DefinitionClient::new(
            &config.definition_api_url,
            &config.definition_model,
        )),
        started_at: Utc::now(),
    };

    // CORS
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
    };

    let app = routes::create_router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind");

    info!(port = config.port, "Listening");

    axum::serve(listener, app).await.expect("Server failed");
}
