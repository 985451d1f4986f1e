//! HTTP request handlers for the Tadpole API
//!
//! Implements the health, FAQ query and refresh status endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::core::error::TadpoleError;
use crate::core::services::Services;
use crate::core::types::*;

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// FAQ query handler
///
/// Matches `query` against the published index. A missing parameter is
/// treated as an empty query and yields no entries.
///
/// # Errors
///
/// - `InvalidQuery`: query exceeds the configured length limit
/// - `Tokenization`: the tokenizer backend failed on the query
pub async fn query_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<QueryResponse>, TadpoleError> {
    tracing::debug!("FAQ query: {:?}", params.query);

    // Tokenizer backends may block on IO
    let faqs = tokio::task::spawn_blocking(move || services.query(&params.query))
        .await
        .map_err(|e| TadpoleError::TaskFailed(format!("Query task failed: {e}")))??;

    Ok(Json(QueryResponse::from(faqs)))
}

/// Refresh status handler
pub async fn status_handler(State(services): State<Arc<Services>>) -> Json<RefreshStatus> {
    Json(services.refresher.status())
}
