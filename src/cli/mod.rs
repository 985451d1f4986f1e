//! CLI adapter for Tadpole
//!
//! Provides the `serve` and `search` commands. Like `http/`, this
//! module depends on `core/` only.
//!
//! Startup happens in two phases. `Cli::resolve_config` runs before any
//! async runtime exists, so the tokenizer (whose remote backend owns a
//! blocking HTTP client) can be built outside it. `run` then executes
//! the command inside the runtime.

pub mod commands;
pub mod output;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::tokenizer::Tokenizer;

/// Tadpole - FAQ search over note files
///
/// Indexes a directory of heading-delimited note files and answers
/// keyword queries with the matching entries.
#[derive(Parser, Debug)]
#[command(name = "tadpole")]
#[command(version)]
#[command(about = "FAQ search over note files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Path to a TOML config file
    #[arg(long, short = 'c', global = true, env = "TADPOLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the FAQ query API, reloading the corpus periodically
    Serve(commands::ServeArgs),

    /// Load the corpus once and print entries matching a query
    Search(commands::SearchArgs),
}

impl Cli {
    /// Load configuration and apply command-line overrides
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        match &self.command {
            Commands::Serve(args) => args.apply(&mut config),
            Commands::Search(args) => args.corpus.apply(&mut config),
        }
        config.validate()?;

        Ok(config)
    }
}

/// Run a command inside the async runtime
pub async fn run(
    command: Commands,
    format: OutputFormat,
    config: Config,
    tokenizer: Arc<dyn Tokenizer>,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve(_) => commands::serve::execute(config, tokenizer).await,
        Commands::Search(args) => {
            commands::search::execute(args, config, tokenizer, format).await
        }
    }
}
