//! Dictionary-free tokenizer based on Unicode word boundaries.

use unicode_segmentation::UnicodeSegmentation;

use crate::core::error::Result;
use crate::core::tokenizer::{TokenFilter, Tokenizer};

/// UAX #29 word segmentation, lowercased
///
/// Han ideographs have no word boundaries in UAX #29, so each one comes
/// out as its own token.
#[derive(Debug, Clone, Default)]
pub struct UnicodeTokenizer {
    filter: TokenFilter,
}

impl UnicodeTokenizer {
    pub fn new(filter: TokenFilter) -> Self {
        Self { filter }
    }
}

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .filter
            .apply(text.unicode_words().map(str::to_lowercase)))
    }

    fn name(&self) -> &'static str {
        "unicode"
    }
}
