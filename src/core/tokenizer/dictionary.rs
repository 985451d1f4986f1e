//! Local dictionary segmenter.
//!
//! Latin letters and digits are grouped into runs and lowercased. Every
//! other script is cut by forward maximum matching against the loaded
//! word list, falling back to one character when nothing matches.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::error::{Result, TadpoleError};
use crate::core::tokenizer::{TokenFilter, Tokenizer};

/// Forward-maximum-matching segmenter over a word list
#[derive(Debug, Clone)]
pub struct DictionaryTokenizer {
    words: HashSet<String>,
    /// Longest dictionary entry, in chars
    max_word_chars: usize,
    filter: TokenFilter,
}

impl DictionaryTokenizer {
    pub fn from_words<I, S>(words: I, filter: TokenFilter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        let max_word_chars = words.iter().map(|w| w.chars().count()).max().unwrap_or(1);

        Self {
            words,
            max_word_chars,
            filter,
        }
    }

    /// Load a dictionary file
    ///
    /// One entry per line; only the first whitespace-separated field is
    /// used, so jieba/gse style `word freq tag` files load as-is. Lines
    /// starting with `#` are comments.
    pub fn from_file(path: &Path, filter: TokenFilter) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| TadpoleError::io(path, e))?;

        let tokenizer = Self::from_words(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#'))
                .filter_map(|line| line.split_whitespace().next())
                .map(str::to_string),
            filter,
        );

        if tokenizer.words.is_empty() {
            return Err(TadpoleError::ConfigError(format!(
                "Dictionary {path:?} contains no words"
            )));
        }

        tracing::info!(
            "Loaded {} dictionary words from {:?} (longest: {} chars)",
            tokenizer.words.len(),
            path,
            tokenizer.max_word_chars
        );

        Ok(tokenizer)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            if c.is_ascii_alphanumeric() {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(chars[start..i].iter().collect::<String>().to_lowercase());
                continue;
            }

            let longest = self.max_word_chars.min(chars.len() - i);
            let matched = (2..=longest).rev().find_map(|len| {
                let candidate: String = chars[i..i + len].iter().collect();
                self.words.contains(&candidate).then_some((candidate, len))
            });

            match matched {
                Some((word, len)) => {
                    tokens.push(word);
                    i += len;
                }
                None => {
                    tokens.push(c.to_string());
                    i += 1;
                }
            }
        }

        tokens
    }
}

impl Tokenizer for DictionaryTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.filter.apply(self.segment(text)))
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
