//! Content-addressed on-disk cache for synthesized audio
//!
//! Stores opaque audio blobs in a single directory, named by a digest of the
//! input text, so repeated synthesis requests for the same text can be served
//! without calling the speech backend again. Entries have no expiry; they
//! live until an explicit full clear.

mod cache;
mod key;
mod store;
mod types;

pub use cache::AudioCache;
pub use key::cache_key;
pub use store::CacheStore;
pub use types::{CacheEntry, CacheStats};
