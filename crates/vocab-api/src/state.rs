use audio_cache::AudioCache;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use std::sync::Arc;

use crate::definitions::DefinitionClient;
use crate::speech::SpeechService;

/// Shared application state passed to all route handlers.
///
/// The cache is constructed (and its directory created) once at startup and
/// injected here; nothing else in the process holds filesystem state.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub cache: AudioCache,
    pub speech: Arc<SpeechService>,
    pub definitions: Arc<DefinitionClient>,
    pub started_at: DateTime<Utc>,
}
