//! Corpus loading.
//!
//! Builds a complete, private index from a corpus directory:
//! 1. Walk the directory tree
//! 2. Read each file as UTF-8
//! 3. Parse it into documents
//! 4. Add every document to a fresh index
//!
//! Any failure aborts the whole load. A half-built index is never
//! returned, so a caller can keep serving the previous one.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::core::config::CorpusConfig;
use crate::core::error::{Result, TadpoleError};
use crate::core::indexer::{FileWalker, NoteParser};
use crate::core::search::InvertedIndex;
use crate::core::tokenizer::Tokenizer;
use crate::core::types::{Document, LoadStats};

/// Turns a corpus directory into an `InvertedIndex`
pub struct CorpusLoader {
    walker: FileWalker,
    parser: NoteParser,
    tokenizer: Arc<dyn Tokenizer>,
}

impl CorpusLoader {
    pub fn new(walker: FileWalker, parser: NoteParser, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            walker,
            parser,
            tokenizer,
        }
    }

    /// Create a loader from the corpus section of the configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Heading marker and file patterns
    /// * `tokenizer` - Tokenizer shared by every index this loader builds
    ///
    /// # Returns
    ///
    /// A new `CorpusLoader` or an error if a pattern is invalid
    pub fn from_config(config: &CorpusConfig, tokenizer: Arc<dyn Tokenizer>) -> Result<Self> {
        let walker = FileWalker::new(
            config.include_patterns.clone(),
            config.exclude_patterns.clone(),
        )?;

        Ok(Self::new(
            walker,
            NoteParser::new(config.heading_marker),
            tokenizer,
        ))
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Load every file under `root` into a new index
    ///
    /// Files are visited in lexical path order. Blocks on file IO and,
    /// for remote backends, on the network.
    pub fn load_corpus(&self, root: &Path) -> Result<(InvertedIndex, LoadStats)> {
        let start = Instant::now();

        tracing::info!("Loading corpus from {:?}", root);
        let files = self.walker.collect_files(root)?;
        tracing::debug!("Found {} corpus files", files.len());

        let mut index = InvertedIndex::new(Arc::clone(&self.tokenizer));
        let mut documents = 0;

        for file_path in &files {
            let docs = self.read_file(file_path)?;
            tracing::debug!("Parsed {:?} ({} documents)", file_path, docs.len());

            for doc in &docs {
                tracing::trace!(title = %doc.title, line = doc.start_line, "Indexing document");
                index.add_doc(doc)?;
            }
            documents += docs.len();
        }

        let stats = LoadStats {
            files_loaded: files.len(),
            documents_indexed: documents,
            tokens: index.token_count(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Corpus loaded: {} files, {} documents, {} tokens in {}ms",
            stats.files_loaded,
            stats.documents_indexed,
            stats.tokens,
            stats.duration_ms
        );

        Ok((index, stats))
    }

    fn read_file(&self, path: &Path) -> Result<Vec<Document>> {
        let text = fs::read_to_string(path).map_err(|e| TadpoleError::io(path, e))?;
        self.parser
            .parse_file_content(&text, &path.display().to_string())
    }
}
