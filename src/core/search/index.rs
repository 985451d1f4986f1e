//! In-memory inverted index from tokens to documents.
//!
//! Append-only for its whole life: a refresh builds a new index and
//! swaps it in rather than editing the published one. Queries return
//! owned copies, never references into the index.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::tokenizer::Tokenizer;
use crate::core::types::Document;

/// How query tokens are matched against indexed tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// A query token matches the identical indexed token only
    #[default]
    Exact,
    /// A query token also matches every indexed token it is a prefix of
    Prefix,
}

/// Token -> posting list, deduplicated by document title
pub struct InvertedIndex {
    postings: HashMap<String, Vec<Arc<Document>>>,
    titles: HashSet<String>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl fmt::Debug for InvertedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvertedIndex")
            .field("tokens", &self.postings.len())
            .field("documents", &self.titles.len())
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl InvertedIndex {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            postings: HashMap::new(),
            titles: HashSet::new(),
            tokenizer,
        }
    }

    /// Index a document under every token of its content and title
    ///
    /// Both texts are tokenized before anything is inserted, so a
    /// tokenizer failure leaves the index untouched. Within one posting
    /// list the first document with a given title wins; later ones with
    /// the same title are skipped for that token.
    pub fn add_doc(&mut self, doc: &Document) -> Result<()> {
        let mut tokens = self.tokenizer.tokenize(&doc.content)?;
        tokens.extend(self.tokenizer.tokenize(&doc.title)?);

        let shared = Arc::new(doc.clone());
        for token in tokens {
            let posting = self.postings.entry(token).or_default();
            if !posting.iter().any(|d| d.title == shared.title) {
                posting.push(Arc::clone(&shared));
            }
        }
        self.titles.insert(doc.title.clone());

        Ok(())
    }

    /// Union of the documents matching any query token, one per title
    pub fn query_docs(&self, query: &str) -> Result<Vec<Document>> {
        self.query_docs_with(query, QueryMode::Exact)
    }

    pub fn query_docs_with(&self, query: &str, mode: QueryMode) -> Result<Vec<Document>> {
        let query_tokens = self.tokenizer.tokenize(query)?;

        let mut postings: Vec<&Vec<Arc<Document>>> = Vec::new();
        for token in &query_tokens {
            match mode {
                QueryMode::Exact => postings.extend(self.postings.get(token)),
                QueryMode::Prefix => postings.extend(
                    self.postings
                        .iter()
                        .filter(|(indexed, _)| indexed.starts_with(token.as_str()))
                        .map(|(_, posting)| posting),
                ),
            }
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut matched = Vec::new();
        for doc in postings.into_iter().flatten() {
            if seen.insert(doc.title.as_str()) {
                matched.push(Document::clone(doc));
            }
        }

        Ok(matched)
    }

    /// Documents sharing a title count once
    pub fn document_count(&self) -> usize {
        self.titles.len()
    }

    pub fn token_count(&self) -> usize {
        self.postings.len()
    }

    /// True until a document is added, even one that yields no tokens
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }
}
