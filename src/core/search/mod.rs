//! Search module.
//!
//! In-memory inverted index keyed by tokenizer output. Matching is
//! boolean: a document either shares a token with the query or it does
//! not. No ranking is applied.

mod index;

pub use index::{InvertedIndex, QueryMode};
