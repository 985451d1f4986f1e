//! Integration tests for the Tadpole REST API
//!
//! Drives the full router, middleware included, with in-process
//! requests.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tadpole::core::config::Config;
use tadpole::core::services::Services;
use tadpole::core::types::*;
use tadpole::http;
use tower::ServiceExt as TowerServiceExt;

use crate::common::{create_test_services, loaded_test_services, unicode_tokenizer, TestCorpus};

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_health_endpoint() {
    let corpus = TestCorpus::small();
    let app = http::router(Arc::new(create_test_services(corpus.path())));

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_query_endpoint() {
    let corpus = TestCorpus::small();
    let app = http::router(Arc::new(loaded_test_services(corpus.path()).await));

    let (status, body) = get(app, "/faq/query?query=commit").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    let faqs = json["data"]["faqs"].as_array().unwrap();
    assert_eq!(faqs.len(), 1);
    assert_eq!(faqs[0]["question"], "* How to undo the last commit");
    assert_eq!(faqs[0]["answer"], "git reset --soft HEAD~1");
    assert_eq!(faqs[0]["questionLineNum"], 1);
    assert!(faqs[0]["path"].as_str().unwrap().ends_with("git.org"));
}

#[tokio::test]
async fn test_query_endpoint_url_encoded_chinese() {
    let corpus = TestCorpus::small();
    let app = http::router(Arc::new(loaded_test_services(corpus.path()).await));

    // "乱码"
    let (status, body) = get(app, "/faq/query?query=%E4%B9%B1%E7%A0%81").await;

    assert_eq!(status, StatusCode::OK);
    let response: QueryResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.data.faqs.len(), 1);
    assert_eq!(response.data.faqs[0].question_line_num, 4);
}

#[tokio::test]
async fn test_query_missing_parameter_is_empty() {
    let corpus = TestCorpus::small();
    let app = http::router(Arc::new(loaded_test_services(corpus.path()).await));

    let (status, body) = get(app, "/faq/query").await;

    assert_eq!(status, StatusCode::OK);
    let response: QueryResponse = serde_json::from_slice(&body).unwrap();
    assert!(response.data.faqs.is_empty());
}

#[tokio::test]
async fn test_query_before_first_load_is_empty() {
    let corpus = TestCorpus::small();
    let app = http::router(Arc::new(create_test_services(corpus.path())));

    let (status, body) = get(app, "/faq/query?query=tmux").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "data": { "faqs": [] } }));
}

#[tokio::test]
async fn test_query_too_long_is_bad_request() {
    let corpus = TestCorpus::small();
    let mut config = Config::default();
    config.corpus.root_dir = Some(corpus.path().to_path_buf());
    config.search.max_query_length = 8;
    let services = Services::new(config, unicode_tokenizer()).unwrap();
    let app = http::router(Arc::new(services));

    let (status, body) = get(app, "/faq/query?query=much+too+long+for+this").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().contains("too long"));
}

#[tokio::test]
async fn test_status_endpoint() {
    let corpus = TestCorpus::small();
    let services = Arc::new(create_test_services(corpus.path()));

    let (_, body) = get(http::router(Arc::clone(&services)), "/faq/status").await;
    let status: RefreshStatus = serde_json::from_slice(&body).unwrap();
    assert!(!status.ready);
    assert_eq!(status.completed_cycles, 0);

    services.refresher.refresh_once().await.unwrap();

    let (code, body) = get(http::router(services), "/faq/status").await;
    assert_eq!(code, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["ready"], true);
    assert_eq!(json["state"], "idle");
    assert_eq!(json["completed_cycles"], 1);
    assert_eq!(json["last_stats"]["documents_indexed"], 5);
    assert!(json.get("last_error").is_none());
}

#[tokio::test]
async fn test_unknown_route() {
    let corpus = TestCorpus::small();
    let app = http::router(Arc::new(create_test_services(corpus.path())));

    let (status, _) = get(app, "/api/v1/search").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
