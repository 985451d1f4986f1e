//! Unified service container for Tadpole
//!
//! Provides shared access to the published index, the refresher that
//! maintains it, and the configuration.

use crate::core::config::Config;
use crate::core::error::{Result, TadpoleError};
use crate::core::indexer::CorpusLoader;
use crate::core::refresh::{IndexHandle, IndexRefresher};
use crate::core::search::QueryMode;
use crate::core::tokenizer::Tokenizer;
use crate::core::types::FaqEntry;
use std::sync::Arc;

/// Unified services container
///
/// The HTTP adapter and the CLI both use this same struct.
#[derive(Clone)]
pub struct Services {
    /// Currently published index
    pub index: Arc<IndexHandle>,

    /// Background reloader feeding `index`
    pub refresher: Arc<IndexRefresher>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration and a ready tokenizer
    ///
    /// Fails if the corpus root is unset or is not a directory. No
    /// index is published until the refresher completes a cycle.
    pub fn new(config: Config, tokenizer: Arc<dyn Tokenizer>) -> Result<Self> {
        let root = config.corpus_root()?.to_path_buf();
        let loader = Arc::new(CorpusLoader::from_config(&config.corpus, tokenizer)?);
        let index = Arc::new(IndexHandle::new());
        let refresher = Arc::new(IndexRefresher::new(loader, root, Arc::clone(&index)));

        Ok(Self {
            index,
            refresher,
            config: Arc::new(config),
        })
    }

    /// Reject queries longer than the configured limit
    pub fn validate_query(&self, query: &str) -> Result<()> {
        let max = self.config.search.max_query_length;
        let len = query.chars().count();
        if len > max {
            return Err(TadpoleError::InvalidQuery(format!(
                "Query too long: {len} chars (max {max})"
            )));
        }
        Ok(())
    }

    /// Match a query against the published index
    ///
    /// Returns no entries before the first index is published. Results
    /// are ordered by file path, then heading line.
    pub fn query(&self, query: &str) -> Result<Vec<FaqEntry>> {
        self.validate_query(query)?;

        let Some(index) = self.index.load() else {
            tracing::debug!("Query before first index publish: {:?}", query);
            return Ok(Vec::new());
        };

        let mode = if self.config.search.prefix_match {
            QueryMode::Prefix
        } else {
            QueryMode::Exact
        };

        let mut faqs: Vec<FaqEntry> = index
            .query_docs_with(query, mode)?
            .into_iter()
            .map(FaqEntry::from)
            .collect();
        faqs.sort_by(|a, b| {
            a.path
                .cmp(&b.path)
                .then(a.question_line_num.cmp(&b.question_line_num))
        });

        Ok(faqs)
    }
}
