//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the HTTP and CLI adapters.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **tokenizer**: Pluggable text segmentation backends
//! - **indexer**: File walking, note parsing and corpus loading
//! - **search**: In-memory inverted index
//! - **refresh**: Periodic reload and atomic index publication
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod indexer;
pub mod refresh;
pub mod search;
pub mod services;
pub mod tokenizer;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, TadpoleError};
pub use services::Services;
