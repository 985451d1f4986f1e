//! Tadpole - FAQ search over a directory of note files
//!
//! Note files are split into documents at heading lines. Every document
//! is indexed under the tokens of its heading and body, and a query
//! returns each document sharing at least one token with it. The corpus
//! is reloaded on a fixed interval and each new index replaces the
//! previous one atomically.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - tokenizer (unicode, dictionary, remote, cached)
//!   - indexer (file walking, parsing, corpus loading)
//!   - search (inverted index)
//!   - refresh (reload loop, index publication)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!
//! - **cli**: Command-line adapter (depends on core and http)

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, TadpoleError};
pub use core::services::Services;
pub use core::types::*;
