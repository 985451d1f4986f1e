//! Tokenizer capability and its backends.
//!
//! The index only ever sees `dyn Tokenizer`. Backends are chosen once at
//! startup from `TokenizerConfig`:
//!
//! - **unicode**: UAX #29 word segmentation, no external data
//! - **dictionary**: forward maximum matching against a local word list
//! - **remote**: a Pullword-style segmentation web API
//!
//! Any backend can be wrapped in an exact-text LRU cache.

pub mod cached;
pub mod dictionary;
pub mod filter;
pub mod remote;
pub mod unicode;

pub use cached::CachedTokenizer;
pub use dictionary::DictionaryTokenizer;
pub use filter::TokenFilter;
pub use remote::RemoteTokenizer;
pub use unicode::UnicodeTokenizer;

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use crate::core::config::{TokenizerBackend, TokenizerConfig};
use crate::core::error::{Result, TadpoleError};

/// Turns text into index keys
///
/// Output order and multiplicity carry no meaning. Implementations must
/// be safe to call from several threads at once.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Short backend name for logs and errors
    fn name(&self) -> &'static str;
}

impl<T: Tokenizer + ?Sized> Tokenizer for Arc<T> {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        (**self).tokenize(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        (**self).tokenize(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Construct the configured backend, loading any data files up front
pub fn build_tokenizer(config: &TokenizerConfig) -> Result<Arc<dyn Tokenizer>> {
    let filter = match &config.stopwords_path {
        Some(path) => TokenFilter::from_stopword_file(path)?,
        None => TokenFilter::default(),
    };

    let backend: Box<dyn Tokenizer> = match config.backend {
        TokenizerBackend::Unicode => Box::new(UnicodeTokenizer::new(filter)),
        TokenizerBackend::Dictionary => {
            let path = config.dictionary_path.as_deref().ok_or_else(|| {
                TadpoleError::ConfigError(
                    "Dictionary tokenizer requires a dictionary path".to_string(),
                )
            })?;
            Box::new(DictionaryTokenizer::from_file(path, filter)?)
        }
        TokenizerBackend::Remote => Box::new(RemoteTokenizer::new(
            config.remote_url.clone(),
            Duration::from_secs(config.remote_timeout_secs),
            filter,
        )?),
    };

    tracing::info!(
        "Tokenizer ready: {} (cache: {} entries)",
        backend.name(),
        config.cache_capacity
    );

    match NonZeroUsize::new(config.cache_capacity) {
        Some(capacity) => Ok(Arc::new(CachedTokenizer::new(backend, capacity))),
        None => Ok(Arc::from(backend)),
    }
}
