//! In-memory embedding cache using moka.
//!
//! The knowledge store never changes after load, so each document is encoded
//! once per encoder rather than once per request.

use std::sync::Arc;

use medassist_core::errors::{EmbeddingError, MedAssistError, MedAssistResult};
use medassist_core::traits::ISemanticEncoder;
use moka::sync::Cache;
use tracing::debug;

/// Embedding cache keyed by a blake3 hash of encoder name and text.
pub struct EmbeddingCache {
    cache: Cache<String, Arc<Vec<f32>>>,
}

impl EmbeddingCache {
    /// Create a cache holding at most `max_entries` vectors.
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    fn key(encoder: &dyn ISemanticEncoder, text: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(encoder.name().as_bytes());
        hasher.update(&[0]);
        hasher.update(text.as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    /// Return the cached vector for `text`, encoding it on a miss.
    ///
    /// Concurrent misses on the same key run the encoder once.
    pub fn get_or_encode(
        &self,
        encoder: &dyn ISemanticEncoder,
        text: &str,
    ) -> MedAssistResult<Arc<Vec<f32>>> {
        let key = Self::key(encoder, text);
        self.cache
            .try_get_with(key, || {
                debug!(encoder = encoder.name(), "embedding cache miss");
                encoder.encode(text).map(Arc::new)
            })
            .map_err(|e: Arc<MedAssistError>| {
                EmbeddingError::InferenceFailed {
                    reason: e.to_string(),
                }
                .into()
            })
    }

    /// Cached vector for `text`, if present.
    pub fn get(&self, encoder: &dyn ISemanticEncoder, text: &str) -> Option<Arc<Vec<f32>>> {
        self.cache.get(&Self::key(encoder, text))
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingEncoder {
        name: &'static str,
        calls: AtomicUsize,
    }

    impl ISemanticEncoder for CountingEncoder {
        fn encode(&self, text: &str) -> MedAssistResult<Vec<f32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![text.len() as f32, 1.0])
        }
        fn name(&self) -> &str {
            self.name
        }
    }

    struct FailingEncoder;

    impl ISemanticEncoder for FailingEncoder {
        fn encode(&self, _text: &str) -> MedAssistResult<Vec<f32>> {
            Err(EmbeddingError::InferenceFailed {
                reason: "mock failure".to_string(),
            }
            .into())
        }
        fn name(&self) -> &str {
            "failing-mock"
        }
    }

    #[test]
    fn second_lookup_hits_cache() {
        let cache = EmbeddingCache::new(16);
        let encoder = CountingEncoder {
            name: "counting",
            calls: AtomicUsize::new(0),
        };
        let a = cache.get_or_encode(&encoder, "fever").unwrap();
        let b = cache.get_or_encode(&encoder, "fever").unwrap();
        assert_eq!(a, b);
        assert_eq!(encoder.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn keys_are_scoped_by_encoder_name() {
        let cache = EmbeddingCache::new(16);
        let first = CountingEncoder {
            name: "first",
            calls: AtomicUsize::new(0),
        };
        let second = CountingEncoder {
            name: "second",
            calls: AtomicUsize::new(0),
        };
        cache.get_or_encode(&first, "cough").unwrap();
        assert!(cache.get(&second, "cough").is_none());
        cache.get_or_encode(&second, "cough").unwrap();
        assert_eq!(second.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failures_are_not_cached() {
        let cache = EmbeddingCache::new(16);
        assert!(cache.get_or_encode(&FailingEncoder, "rash").is_err());
        assert!(cache.get(&FailingEncoder, "rash").is_none());
    }

    #[test]
    fn clear_empties_cache() {
        let cache = EmbeddingCache::new(16);
        let encoder = CountingEncoder {
            name: "counting",
            calls: AtomicUsize::new(0),
        };
        cache.get_or_encode(&encoder, "a").unwrap();
        cache.clear();
        assert!(cache.get(&encoder, "a").is_none());
    }
}
