//! Periodic corpus reload with atomic index publication.
//!
//! Each cycle builds a complete index in private and then swaps it in
//! with a single pointer store. Queries holding the previous index
//! finish against it; new queries see the new one. A failed cycle
//! publishes nothing.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwapOption;
use chrono::Utc;
use parking_lot::RwLock;
use tokio::time::MissedTickBehavior;

use crate::core::error::{Result, TadpoleError};
use crate::core::indexer::CorpusLoader;
use crate::core::search::InvertedIndex;
use crate::core::types::{LoadStats, RefreshState, RefreshStatus};

/// Holder of the currently published index
#[derive(Debug, Default)]
pub struct IndexHandle {
    inner: ArcSwapOption<InvertedIndex>,
}

impl IndexHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the published index, `None` before the first publish
    pub fn load(&self) -> Option<Arc<InvertedIndex>> {
        self.inner.load_full()
    }

    /// Atomically replace the published index
    pub fn publish(&self, index: InvertedIndex) {
        self.inner.store(Some(Arc::new(index)));
    }

    pub fn is_ready(&self) -> bool {
        self.inner.load().is_some()
    }
}

/// Rebuilds the index from the corpus directory on a fixed interval
pub struct IndexRefresher {
    loader: Arc<CorpusLoader>,
    root: PathBuf,
    handle: Arc<IndexHandle>,
    status: RwLock<RefreshStatus>,
}

impl IndexRefresher {
    pub fn new(loader: Arc<CorpusLoader>, root: impl Into<PathBuf>, handle: Arc<IndexHandle>) -> Self {
        Self {
            loader,
            root: root.into(),
            handle,
            status: RwLock::new(RefreshStatus::default()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn handle(&self) -> &Arc<IndexHandle> {
        &self.handle
    }

    /// Current refresh status
    pub fn status(&self) -> RefreshStatus {
        let mut status = self.status.read().clone();
        status.ready = self.handle.is_ready();
        status
    }

    /// Run one load-and-publish cycle
    ///
    /// On failure the previously published index stays in place and the
    /// error is recorded in the status.
    pub async fn refresh_once(&self) -> Result<LoadStats> {
        self.status.write().state = RefreshState::Building;

        let loader = Arc::clone(&self.loader);
        let root = self.root.clone();
        let outcome = tokio::task::spawn_blocking(move || loader.load_corpus(&root))
            .await
            .map_err(|e| TadpoleError::TaskFailed(format!("Corpus load task failed: {e}")))
            .and_then(|result| result);

        let mut status = self.status.write();
        status.state = RefreshState::Idle;

        match outcome {
            Ok((index, stats)) => {
                self.handle.publish(index);
                status.completed_cycles += 1;
                status.last_published_at = Some(Utc::now());
                status.last_error = None;
                status.last_stats = Some(stats.clone());
                tracing::info!(
                    documents = stats.documents_indexed,
                    tokens = stats.tokens,
                    duration_ms = stats.duration_ms,
                    "Published new index"
                );
                Ok(stats)
            }
            Err(e) => {
                status.failed_cycles += 1;
                status.last_error = Some(e.message());
                tracing::error!(
                    root = ?self.root,
                    error = %e,
                    "Corpus reload failed, keeping previous index"
                );
                Err(e)
            }
        }
    }

    /// Reload forever; the first cycle starts immediately
    pub async fn run(self: Arc<Self>, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            "Refreshing {:?} every {}s",
            self.root,
            interval.as_secs()
        );

        loop {
            ticker.tick().await;
            // Failures are logged and recorded in the status
            let _ = self.refresh_once().await;
        }
    }
}
