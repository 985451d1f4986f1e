//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a
//! specific CLI command.

pub mod search;
pub mod serve;

// Re-export argument types for use in mod.rs
pub use search::SearchArgs;
pub use serve::ServeArgs;

use std::path::PathBuf;

use clap::Args;

use crate::core::config::{Config, TokenizerBackend};

/// Corpus and tokenizer options shared by every command
#[derive(Args, Debug, Default, Clone)]
pub struct CorpusArgs {
    /// Directory of note files to index
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Word list for the dictionary tokenizer (selects that backend)
    #[arg(long = "dict", short = 'i')]
    pub dict: Option<PathBuf>,
}

impl CorpusArgs {
    /// Apply command-line overrides on top of file and env config
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.dir {
            config.corpus.root_dir = Some(dir.clone());
        }
        if let Some(dict) = &self.dict {
            config.tokenizer.backend = TokenizerBackend::Dictionary;
            config.tokenizer.dictionary_path = Some(dict.clone());
        }
    }
}
