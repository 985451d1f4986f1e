//! Remote segmentation API backend (Pullword protocol).
//!
//! Request: `GET <url>?source=<text>&param1=0&param2=0&json=1`.
//! Response: a JSON array of `{"t": "<word>"}` objects.
//!
//! Calls block the current thread; run them off the async executor.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::core::error::{Result, TadpoleError};
use crate::core::tokenizer::{TokenFilter, Tokenizer};

const BACKEND: &str = "remote";

#[derive(Debug, Deserialize)]
struct PullWordToken {
    t: String,
}

/// Tokenizer backed by an HTTP segmentation service
#[derive(Debug, Clone)]
pub struct RemoteTokenizer {
    client: Client,
    url: String,
    filter: TokenFilter,
}

impl RemoteTokenizer {
    /// Build the HTTP client
    ///
    /// Must not be called from inside an async runtime: the blocking
    /// client owns a runtime of its own.
    pub fn new(url: impl Into<String>, timeout: Duration, filter: TokenFilter) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TadpoleError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
            filter,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Decode a Pullword response body into raw tokens
pub fn parse_response(body: &str) -> Result<Vec<String>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tokens: Vec<PullWordToken> = serde_json::from_str(body)
        .map_err(|e| TadpoleError::tokenization(BACKEND, format!("Malformed response: {e}")))?;

    Ok(tokens.into_iter().map(|token| token.t).collect())
}

impl Tokenizer for RemoteTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("source", text),
                ("param1", "0"),
                ("param2", "0"),
                ("json", "1"),
            ])
            .send()
            .map_err(|e| TadpoleError::tokenization(BACKEND, format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TadpoleError::tokenization(
                BACKEND,
                format!("Unexpected status {status}"),
            ));
        }

        let body = response
            .text()
            .map_err(|e| TadpoleError::tokenization(BACKEND, format!("Unreadable body: {e}")))?;

        Ok(self.filter.apply(parse_response(&body)?))
    }

    fn name(&self) -> &'static str {
        BACKEND
    }
}
