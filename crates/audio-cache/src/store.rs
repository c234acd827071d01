//! Directory-backed blob storage
//!
//! A thin persistence layer over a single cache directory. Entries are files
//! named `<digest>.mp3`; everything else in the directory is ignored. All
//! I/O goes through `tokio::fs` so disk work never blocks the runtime.

use crate::types::CacheEntry;
use chrono::{DateTime, Utc};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tracing::debug;

const ENTRY_EXT: &str = "mp3";

/// Counter for unique temp-file names, so concurrent writes to the same key
/// never share a scratch file.
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Filesystem store for cached audio blobs
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the cache directory if it does not exist. Call once at startup;
    /// the directory (and its entries) survives process restarts.
    pub async fn init(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir).await
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{ENTRY_EXT}"))
    }

    /// Whether a blob is present for the given key.
    pub async fn exists(&self, key: &str) -> bool {
        fs::try_exists(self.entry_path(key)).await.unwrap_or(false)
    }

    /// Read a blob. `Ok(None)` is the expected not-found case, including an
    /// entry that vanished between an existence check and the open.
    pub async fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.entry_path(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create or overwrite a blob. Writes to a uniquely named temp file in
    /// the same directory, then renames into place, so a concurrent reader
    /// never observes a partial blob.
    pub async fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        let tmp = self.dir.join(format!(
            "{key}.{}.{}.tmp",
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        if let Err(e) = fs::write(&tmp, bytes).await {
            // A partial scratch file may exist (e.g. disk full mid-write);
            // nothing else ever removes stray .tmp files
            let _ = fs::remove_file(&tmp).await;
            return Err(e);
        }
        match fs::rename(&tmp, self.entry_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) => {
                // Best-effort scratch cleanup; the rename error is what matters
                let _ = fs::remove_file(&tmp).await;
                Err(e)
            }
        }
    }

    /// Enumerate current entries with size and creation time.
    ///
    /// The directory is live: entries may appear or disappear while we walk
    /// it. Vanished entries are skipped, so the result is a best-effort
    /// snapshot rather than a transactional one.
    pub async fn list(&self) -> io::Result<Vec<CacheEntry>> {
        let mut dir = match fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(ENTRY_EXT) {
                continue;
            }
            let key = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            let meta = match entry.metadata().await {
                Ok(meta) => meta,
                // Removed between readdir and stat
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e),
            };
            // Creation time is not available on every filesystem
            let created_at: DateTime<Utc> = meta.created().or_else(|_| meta.modified())?.into();
            entries.push(CacheEntry {
                key,
                size: meta.len(),
                created_at,
            });
        }
        Ok(entries)
    }

    /// Delete every entry, returning the count removed. Entries already gone
    /// by the time of their individual unlink are skipped silently.
    pub async fn clear(&self) -> io::Result<usize> {
        let mut removed = 0;
        for entry in self.list().await? {
            match fs::remove_file(self.entry_path(&entry.key)).await {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        debug!(removed, "Cleared cache directory");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> CacheStore {
        CacheStore::new(dir.path().to_path_buf())
    }

    #[tokio::test]
    async fn test_read_missing_entry_is_none() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.init().await.unwrap();

        assert!(!store.exists("deadbeef").await);
        assert!(store.read("deadbeef").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.init().await.unwrap();

        let payload = vec![0u8, 1, 2, 255, 254];
        store.write("abc123", &payload).await.unwrap();

        assert!(store.exists("abc123").await);
        assert_eq!(store.read("abc123").await.unwrap().unwrap(), payload);
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.init().await.unwrap();

        store.write("abc123", b"first").await.unwrap();
        store.write("abc123", b"second").await.unwrap();

        assert_eq!(store.read("abc123").await.unwrap().unwrap(), b"second");
        // The overwrite must not leave a second entry behind
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.init().await.unwrap();

        store.write("abc123", b"audio").await.unwrap();

        let mut names = Vec::new();
        let mut rd = tokio::fs::read_dir(dir.path()).await.unwrap();
        while let Some(entry) = rd.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        assert_eq!(names, vec!["abc123.mp3".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_write_surfaces_error_and_leaves_no_scratch() {
        let dir = tempdir().unwrap();

        // Occupy the store's path with a regular file so every write fails
        let blocked = dir.path().join("not-a-dir");
        tokio::fs::write(&blocked, b"occupied").await.unwrap();
        let store = CacheStore::new(blocked);

        assert!(store.write("abc123", b"audio").await.is_err());

        // The failure must not have scattered scratch files around
        let mut names = Vec::new();
        let mut rd = tokio::fs::read_dir(dir.path()).await.unwrap();
        while let Some(entry) = rd.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        assert_eq!(names, vec!["not-a-dir".to_string()]);
    }

    #[tokio::test]
    async fn test_list_reports_size_and_skips_foreign_files() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.init().await.unwrap();

        store.write("aaa", &[0u8; 100]).await.unwrap();
        store.write("bbb", &[0u8; 50]).await.unwrap();
        tokio::fs::write(dir.path().join("notes.txt"), b"not audio")
            .await
            .unwrap();

        let mut entries = store.list().await.unwrap();
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "aaa");
        assert_eq!(entries[0].size, 100);
        assert_eq!(entries[1].key, "bbb");
        assert_eq!(entries[1].size, 50);
    }

    #[tokio::test]
    async fn test_list_on_missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("never-created"));

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_removes_everything_and_counts() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.init().await.unwrap();

        store.write("aaa", b"one").await.unwrap();
        store.write("bbb", b"two").await.unwrap();
        store.write("ccc", b"three").await.unwrap();

        assert_eq!(store.clear().await.unwrap(), 3);
        assert!(store.list().await.unwrap().is_empty());
        assert!(store.read("aaa").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_on_empty_store() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.init().await.unwrap();

        assert_eq!(store.clear().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clear_skips_already_deleted_entries() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.init().await.unwrap();

        store.write("aaa", b"one").await.unwrap();
        store.write("bbb", b"two").await.unwrap();

        // Simulate a concurrent deleter racing the clear
        tokio::fs::remove_file(dir.path().join("aaa.mp3"))
            .await
            .unwrap();

        assert_eq!(store.clear().await.unwrap(), 1);
    }
}
