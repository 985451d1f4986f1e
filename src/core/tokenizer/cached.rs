//! Exact-text result cache in front of a slow backend.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::core::error::Result;
use crate::core::tokenizer::Tokenizer;

/// LRU cache of successful tokenizations keyed by the exact input text
///
/// Failures are passed through and never cached. The lock is not held
/// while the inner backend runs.
pub struct CachedTokenizer<T: Tokenizer> {
    inner: T,
    cache: Mutex<LruCache<String, Vec<String>>>,
}

impl<T: Tokenizer> CachedTokenizer<T> {
    pub fn new(inner: T, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Tokenizer> Tokenizer for CachedTokenizer<T> {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        if let Some(tokens) = self.cache.lock().get(text) {
            return Ok(tokens.clone());
        }

        let tokens = self.inner.tokenize(text)?;
        self.cache.lock().put(text.to_string(), tokens.clone());
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
