//! Cache key derivation

use sha2::{Digest, Sha256};

/// Derive the cache key for a piece of input text.
///
/// SHA-256 over the exact UTF-8 bytes, lowercase hex. No normalization is
/// applied: case and whitespace are significant, so "Hello" and "hello" map
/// to distinct entries.
pub fn cache_key(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_deterministic() {
        assert_eq!(cache_key("hello world"), cache_key("hello world"));
    }

    #[test]
    fn test_key_is_fixed_length_hex() {
        let key = cache_key("the quick brown fox");
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_distinct_texts_get_distinct_keys() {
        assert_ne!(cache_key("apple"), cache_key("banana"));
    }

    #[test]
    fn test_case_and_whitespace_are_significant() {
        assert_ne!(cache_key("Hello"), cache_key("hello"));
        assert_ne!(cache_key("hello"), cache_key("hello "));
    }

    #[test]
    fn test_non_ascii_text() {
        let key = cache_key("苹果 pronunciation");
        assert_eq!(key.len(), 64);
        assert_eq!(key, cache_key("苹果 pronunciation"));
    }
}
