//! Speech acquisition: cache-first orchestration over the synthesis backend
//!
//! A hit serves the stored blob and skips the backend entirely; a miss makes
//! exactly one backend call (no internal retry) and memoizes the result.
//! Failures are never cached, and cache read errors degrade to a miss rather
//! than failing the request.

use async_trait::async_trait;
use audio_cache::AudioCache;
use reqwest::Client;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum SynthesisError {
    Backend(String),
    EmptyAudio,
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthesisError::Backend(msg) => write!(f, "Synthesis backend error: {}", msg),
            SynthesisError::EmptyAudio => write!(f, "Synthesis backend returned no audio"),
        }
    }
}

impl std::error::Error for SynthesisError {}

/// The external text-to-speech service, treated as a black box
#[async_trait]
pub trait SpeechBackend: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SynthesisError>;
}

#[derive(Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
    voice: &'a str,
    engine: &'a str,
    output_format: &'a str,
}

/// HTTP client for the speech synthesis service
pub struct HttpSpeechBackend {
    client: Client,
    base_url: String,
    voice: String,
    engine: String,
}

impl HttpSpeechBackend {
    pub fn new(base_url: &str, voice: &str, engine: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.to_string(),
            voice: voice.to_string(),
            engine: engine.to_string(),
        }
    }
}

#[async_trait]
impl SpeechBackend for HttpSpeechBackend {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SynthesisError> {
        let url = format!("{}/synthesize", self.base_url);
        debug!(url = %url, "Calling synthesis backend");

        let response = self
            .client
            .post(&url)
            .json(&SynthesizeRequest {
                text,
                voice: &self.voice,
                engine: &self.engine,
                // Fixed: cache entries are stored as .mp3 files
                output_format: "mp3",
            })
            .send()
            .await
            .map_err(|e| SynthesisError::Backend(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SynthesisError::Backend(format!(
                "synthesis backend returned status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Backend(e.to_string()))?;

        debug!(size = bytes.len(), "Received synthesized audio");
        Ok(bytes.to_vec())
    }
}

/// Audio returned by the orchestrator, flagged with its provenance
#[derive(Debug)]
pub struct SpeechAudio {
    pub bytes: Vec<u8>,
    pub cached: bool,
}

/// Cache-first speech acquisition
pub struct SpeechService {
    cache: AudioCache,
    backend: Arc<dyn SpeechBackend>,
}

impl SpeechService {
    pub fn new(cache: AudioCache, backend: Arc<dyn SpeechBackend>) -> Self {
        Self { cache, backend }
    }

    /// Serve audio for the given text, from cache when possible.
    ///
    /// Two concurrent misses for the same text may both reach the backend;
    /// last writer wins and both callers get valid audio.
    pub async fn generate(&self, text: &str) -> Result<SpeechAudio, SynthesisError> {
        match self.cache.lookup(text).await {
            Ok(Some(bytes)) => {
                return Ok(SpeechAudio {
                    bytes,
                    cached: true,
                })
            }
            Ok(None) => {}
            // Fail open: a broken cache read degrades to a miss
            Err(e) => warn!(error = %e, "Cache lookup failed, treating as miss"),
        }

        let bytes = self.backend.synthesize(text).await?;
        if bytes.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        if let Err(e) = self.cache.remember(text, &bytes).await {
            // The caller still gets its audio; only the memoization is lost
            warn!(error = %e, "Failed to cache synthesized audio");
        }

        Ok(SpeechAudio {
            bytes,
            cached: false,
        })
    }
}
