//! Core data types for the Tadpole FAQ service.
//!
//! Documents extracted from note files, the query result shape handed
//! to the HTTP layer, and the statistics reported by load cycles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One heading-delimited entry extracted from a note file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Heading line, marker included
    pub title: String,

    /// Non-empty body lines joined with '\n'
    pub content: String,

    /// File the entry was read from
    pub source_path: String,

    /// 1-based line number of the heading
    pub start_line: usize,
}

/// A matched document as exposed to API callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub answer: String,
    pub path: String,
    pub question: String,
    pub question_line_num: usize,
}

impl From<Document> for FaqEntry {
    fn from(doc: Document) -> Self {
        Self {
            answer: doc.content,
            path: doc.source_path,
            question: doc.title,
            question_line_num: doc.start_line,
        }
    }
}

/// Statistics from one corpus load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Files parsed and indexed
    pub files_loaded: usize,

    /// Documents passed to the index
    pub documents_indexed: usize,

    /// Distinct tokens in the resulting index
    pub tokens: usize,

    /// Load duration in milliseconds
    pub duration_ms: u64,
}

/// Phase of the index refresher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshState {
    Idle,
    Building,
}

/// Snapshot of the refresher's bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshStatus {
    pub state: RefreshState,

    /// Whether any index has been published yet
    pub ready: bool,

    /// Cycles that published a new index
    pub completed_cycles: u64,

    /// Cycles that failed and kept the previous index
    pub failed_cycles: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_published_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_stats: Option<LoadStats>,
}

impl Default for RefreshStatus {
    fn default() -> Self {
        Self {
            state: RefreshState::Idle,
            ready: false,
            completed_cycles: 0,
            failed_cycles: 0,
            last_published_at: None,
            last_error: None,
            last_stats: None,
        }
    }
}

/// Query string parameters for the FAQ endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    pub query: String,
}

/// List of matched FAQ entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqList {
    pub faqs: Vec<FaqEntry>,
}

/// Response envelope for the FAQ endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub data: FaqList,
}

impl From<Vec<FaqEntry>> for QueryResponse {
    fn from(faqs: Vec<FaqEntry>) -> Self {
        Self {
            data: FaqList { faqs },
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
