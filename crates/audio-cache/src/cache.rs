//! Cache facade
//!
//! `AudioCache` combines key derivation with the directory store and is the
//! only surface the rest of the application should touch.

use crate::key::cache_key;
use crate::store::CacheStore;
use crate::types::CacheStats;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Content-addressed cache of synthesized audio, keyed by input text
#[derive(Debug, Clone)]
pub struct AudioCache {
    store: CacheStore,
}

impl AudioCache {
    /// Create a cache over the given directory. Call [`AudioCache::init`]
    /// once at process start before first use.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            store: CacheStore::new(dir),
        }
    }

    pub async fn init(&self) -> io::Result<()> {
        self.store.init().await
    }

    pub fn dir(&self) -> &Path {
        self.store.dir()
    }

    /// Return the cached audio for the given text, or `None` on a miss.
    pub async fn lookup(&self, text: &str) -> io::Result<Option<Vec<u8>>> {
        let key = cache_key(text);
        let found = self.store.read(&key).await?;
        if found.is_some() {
            debug!(%key, "Audio cache hit");
        }
        Ok(found)
    }

    /// Store audio for the given text, overwriting any previous entry.
    pub async fn remember(&self, text: &str, bytes: &[u8]) -> io::Result<()> {
        let key = cache_key(text);
        self.store.write(&key, bytes).await?;
        debug!(%key, size = bytes.len(), "Stored audio in cache");
        Ok(())
    }

    /// Aggregate statistics over the current entries. An empty cache yields
    /// zero counts and `None` timestamps.
    pub async fn stats(&self) -> io::Result<CacheStats> {
        let entries = self.store.list().await?;
        let total_size_bytes: u64 = entries.iter().map(|e| e.size).sum();
        let total_size_mb = (total_size_bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0;

        Ok(CacheStats {
            file_count: entries.len(),
            total_size_bytes,
            total_size_mb,
            oldest_entry: entries.iter().map(|e| e.created_at).min(),
            newest_entry: entries.iter().map(|e| e.created_at).max(),
        })
    }

    /// Delete every entry, returning the count removed.
    pub async fn clear_all(&self) -> io::Result<usize> {
        self.store.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn cache_in(dir: &tempfile::TempDir) -> AudioCache {
        let cache = AudioCache::new(dir.path().to_path_buf());
        cache.init().await.unwrap();
        cache
    }

    #[tokio::test]
    async fn test_miss_then_hit() {
        let dir = tempdir().unwrap();
        let cache = cache_in(&dir).await;

        assert!(cache.lookup("hello").await.unwrap().is_none());

        cache.remember("hello", b"mp3 bytes").await.unwrap();
        assert_eq!(cache.lookup("hello").await.unwrap().unwrap(), b"mp3 bytes");
    }

    #[tokio::test]
    async fn test_round_trip_is_byte_identical() {
        let dir = tempdir().unwrap();
        let cache = cache_in(&dir).await;

        let payload: Vec<u8> = (0..=255).collect();
        cache.remember("binary payload", &payload).await.unwrap();

        assert_eq!(cache.lookup("binary payload").await.unwrap().unwrap(), payload);
    }

    #[tokio::test]
    async fn test_distinct_texts_do_not_collide() {
        let dir = tempdir().unwrap();
        let cache = cache_in(&dir).await;

        cache.remember("apple", b"audio-a").await.unwrap();
        cache.remember("banana", b"audio-b").await.unwrap();

        assert_eq!(cache.lookup("apple").await.unwrap().unwrap(), b"audio-a");
        assert_eq!(cache.lookup("banana").await.unwrap().unwrap(), b"audio-b");
    }

    #[tokio::test]
    async fn test_stats_on_empty_cache() {
        let dir = tempdir().unwrap();
        let cache = cache_in(&dir).await;

        let stats = cache.stats().await.unwrap();
        assert_eq!(stats.file_count, 0);
        assert_eq!(stats.total_size_bytes, 0);
        assert_eq!(stats.total_size_mb, 0.0);
        assert!(stats.oldest_entry.is_none());
        assert!(stats.newest_entry.is_none());
    }

    #[tokio::test]
    async fn test_stats_counts_and_sizes() {
        let dir = tempdir().unwrap();
        let cache = cache_in(&dir).await;

        cache.remember("one", &[0u8; 300]).await.unwrap();
        cache.remember("two", &[0u8; 700]).await.unwrap();

        let stats = cache.stats().await.unwrap();
        assert_eq!(stats.file_count, 2);
        assert_eq!(stats.total_size_bytes, 1000);
        assert!(stats.oldest_entry.is_some());
        assert!(stats.newest_entry.is_some());
        assert!(stats.oldest_entry <= stats.newest_entry);
    }

    #[tokio::test]
    async fn test_clear_all_then_everything_misses() {
        let dir = tempdir().unwrap();
        let cache = cache_in(&dir).await;

        cache.remember("one", b"a").await.unwrap();
        cache.remember("two", b"b").await.unwrap();

        assert_eq!(cache.clear_all().await.unwrap(), 2);
        assert_eq!(cache.stats().await.unwrap().file_count, 0);
        assert!(cache.lookup("one").await.unwrap().is_none());
        assert!(cache.lookup("two").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remember_overwrites_previous_audio() {
        let dir = tempdir().unwrap();
        let cache = cache_in(&dir).await;

        cache.remember("word", b"take one").await.unwrap();
        cache.remember("word", b"take two").await.unwrap();

        assert_eq!(cache.lookup("word").await.unwrap().unwrap(), b"take two");
        assert_eq!(cache.stats().await.unwrap().file_count, 1);
    }
}
