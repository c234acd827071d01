//! Cache types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one stored audio blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Content digest the entry is named by
    pub key: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

/// Aggregate statistics over the cache directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheStats {
    pub file_count: usize,
    pub total_size_bytes: u64,
    pub total_size_mb: f64,
    /// None when the cache is empty
    pub oldest_entry: Option<DateTime<Utc>>,
    /// None when the cache is empty
    pub newest_entry: Option<DateTime<Utc>>,
}
