use std::env;
use std::path::PathBuf;

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub cache_dir: PathBuf,
    pub definition_api_url: String,
    pub definition_model: String,
    pub synthesis_api_url: String,
    pub tts_voice: String,
    pub tts_engine: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/vocab".to_string());

        let cache_dir = env::var("CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./audio_cache"));

        let definition_api_url = env::var("DEFINITION_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let definition_model =
            env::var("DEFINITION_MODEL").unwrap_or_else(|_| "claude-3-sonnet".to_string());

        let synthesis_api_url = env::var("SYNTHESIS_API_URL")
            .unwrap_or_else(|_| "http://localhost:8081".to_string());

        let tts_voice = env::var("TTS_VOICE").unwrap_or_else(|_| "Joanna".to_string());
        let tts_engine = env::var("TTS_ENGINE").unwrap_or_else(|_| "neural".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|s| s.split(',').map(|o| o.trim().to_string()).collect())
            .unwrap_or_else(|_| vec!["http://localhost:3000".to_string()]);

        Self {
            port,
            database_url,
            cache_dir,
            definition_api_url,
            definition_model,
            synthesis_api_url,
            tts_voice,
            tts_engine,
            cors_origins,
        }
    }
}
