//! Post-segmentation token cleanup shared by all backends.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{Result, TadpoleError};

// Tokens made only of punctuation or symbols carry no meaning as keys
static PUNCTUATION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{P}\p{S}]+$").unwrap());

/// Trims tokens and drops empty, punctuation-only and stop-word tokens
#[derive(Debug, Clone, Default)]
pub struct TokenFilter {
    stopwords: HashSet<String>,
}

impl TokenFilter {
    pub fn with_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stopwords: words
                .into_iter()
                .map(Into::into)
                .map(|w: String| w.to_lowercase())
                .collect(),
        }
    }

    /// Load stop words from a file with one word per line, any case
    pub fn from_stopword_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| TadpoleError::io(path, e))?;

        let filter = Self::with_stopwords(
            contents
                .lines()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string),
        );
        tracing::debug!(
            "Loaded {} stop words from {:?}",
            filter.stopwords.len(),
            path
        );

        Ok(filter)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Stop words match case-insensitively
    pub fn keep(&self, token: &str) -> bool {
        !token.is_empty() && !PUNCTUATION_PATTERN.is_match(token) && !self.is_stopword(token)
    }

    fn is_stopword(&self, token: &str) -> bool {
        if self.stopwords.contains(token) {
            return true;
        }
        token.chars().any(char::is_uppercase) && self.stopwords.contains(&token.to_lowercase())
    }

    pub fn apply<I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        tokens
            .into_iter()
            .filter_map(|token| {
                let trimmed = token.trim();
                if !self.keep(trimmed) {
                    None
                } else if trimmed.len() == token.len() {
                    Some(token)
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect()
    }
}
