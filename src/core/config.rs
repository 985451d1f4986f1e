//! Configuration management for the Tadpole FAQ service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, TadpoleError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Corpus configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Directory holding the note files
    #[serde(default)]
    pub root_dir: Option<PathBuf>,

    /// First character of a heading line
    #[serde(default = "default_heading_marker")]
    pub heading_marker: char,

    /// File patterns to include (glob syntax, empty = all)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Refresh configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    /// Seconds between corpus rebuilds
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

/// Which tokenizer backend to construct
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerBackend {
    #[default]
    Unicode,
    Dictionary,
    Remote,
}

impl std::str::FromStr for TokenizerBackend {
    type Err = TadpoleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(Self::Unicode),
            "dictionary" | "dict" => Ok(Self::Dictionary),
            "remote" => Ok(Self::Remote),
            other => Err(TadpoleError::ConfigError(format!(
                "Unknown tokenizer backend '{other}'"
            ))),
        }
    }
}

/// Tokenizer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub backend: TokenizerBackend,

    /// Word list for the dictionary backend
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,

    /// Stop words dropped from every token stream
    #[serde(default)]
    pub stopwords_path: Option<PathBuf>,

    /// Endpoint of the remote segmentation API
    #[serde(default = "default_remote_url")]
    pub remote_url: String,

    /// Request timeout for the remote backend
    #[serde(default = "default_remote_timeout")]
    pub remote_timeout_secs: u64,

    /// LRU entries cached per exact input text (0 disables)
    #[serde(default)]
    pub cache_capacity: usize,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum query string length in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    /// Also match indexed tokens that start with a query token
    #[serde(default)]
    pub prefix_match: bool,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_heading_marker() -> char {
    '*'
}

fn default_interval_secs() -> u64 {
    60
}

fn default_remote_url() -> String {
    "http://api.pullword.com/get.php".to_string()
}

fn default_remote_timeout() -> u64 {
    10
}

fn default_max_query_length() -> usize {
    500
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            root_dir: None,
            heading_marker: default_heading_marker(),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            backend: TokenizerBackend::default(),
            dictionary_path: None,
            stopwords_path: None,
            remote_url: default_remote_url(),
            remote_timeout_secs: default_remote_timeout(),
            cache_capacity: 0,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_query_length: default_max_query_length(),
            prefix_match: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TadpoleError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// The TOML file is `explicit_path` if given, else `TADPOLE_CONFIG`,
    /// else `./tadpole.toml` when present.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Ok(config_path) = env::var("TADPOLE_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("tadpole.toml").exists() {
            Self::from_file("tadpole.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Corpus configuration
        if let Ok(dir) = env::var("TADPOLE_CORPUS_DIR") {
            self.corpus.root_dir = Some(PathBuf::from(dir));
        }

        // Refresh configuration
        if let Ok(interval) = env::var("TADPOLE_REFRESH_INTERVAL_SEC") {
            if let Ok(secs) = interval.parse() {
                self.refresh.interval_secs = secs;
            }
        }

        // Tokenizer configuration
        if let Ok(backend) = env::var("TADPOLE_TOKENIZER") {
            match backend.parse() {
                Ok(b) => self.tokenizer.backend = b,
                Err(e) => tracing::warn!("Ignoring TADPOLE_TOKENIZER: {}", e),
            }
        }
        if let Ok(dict) = env::var("TADPOLE_DICT_PATH") {
            self.tokenizer.dictionary_path = Some(PathBuf::from(dict));
        }
        if let Ok(stopwords) = env::var("TADPOLE_STOPWORDS_PATH") {
            self.tokenizer.stopwords_path = Some(PathBuf::from(stopwords));
        }

        // Search configuration
        if let Ok(max_query_len) = env::var("TADPOLE_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }

        // Server configuration
        if let Ok(host) = env::var("TADPOLE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("TADPOLE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.corpus.heading_marker.is_whitespace() {
            return Err(TadpoleError::ConfigError(
                "Heading marker must not be whitespace".to_string(),
            ));
        }

        if self.refresh.interval_secs == 0 {
            return Err(TadpoleError::ConfigError(
                "Refresh interval must be non-zero".to_string(),
            ));
        }

        match self.tokenizer.backend {
            TokenizerBackend::Dictionary if self.tokenizer.dictionary_path.is_none() => {
                return Err(TadpoleError::ConfigError(
                    "Dictionary tokenizer requires a dictionary path".to_string(),
                ));
            }
            TokenizerBackend::Remote if self.tokenizer.remote_url.trim().is_empty() => {
                return Err(TadpoleError::ConfigError(
                    "Remote tokenizer requires a URL".to_string(),
                ));
            }
            _ => {}
        }

        if self.tokenizer.remote_timeout_secs == 0 {
            return Err(TadpoleError::ConfigError(
                "Remote timeout must be non-zero".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(TadpoleError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve the corpus root, which must be an existing directory
    pub fn corpus_root(&self) -> Result<&Path> {
        let root = self.corpus.root_dir.as_deref().ok_or_else(|| {
            TadpoleError::ConfigError("Corpus directory is not set".to_string())
        })?;

        if !root.is_dir() {
            return Err(TadpoleError::ConfigError(format!(
                "Corpus directory not found: {}",
                root.display()
            )));
        }

        Ok(root)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Corpus dir: {:?}", self.corpus.root_dir);
        tracing::info!("  Heading marker: {:?}", self.corpus.heading_marker);
        tracing::info!(
            "  Include patterns: {} patterns",
            self.corpus.include_patterns.len()
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.corpus.exclude_patterns.len()
        );
        tracing::info!("  Refresh interval: {}s", self.refresh.interval_secs);
        tracing::info!("  Tokenizer: {:?}", self.tokenizer.backend);
        tracing::info!("  Token cache: {} entries", self.tokenizer.cache_capacity);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Prefix match: {}", self.search.prefix_match);
        tracing::info!("  Listen: {}:{}", self.server.host, self.server.port);
    }
}
