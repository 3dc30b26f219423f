use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs;
use std::path::Path;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Model server configuration
    #[serde(default)]
    pub model: ModelConfig,

    /// Summarization pipeline configuration
    #[serde(default)]
    pub summarizer: SummarizerConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Configuration for the model server backend
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelConfig {
    // @field: Model server endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: Pretrained checkpoint identifier
    #[serde(default = "default_checkpoint")]
    pub checkpoint: String,

    // @field: Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Configuration for the summarization pipeline
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SummarizerConfig {
    // @field: Maximum input tokens the model accepts in one pass
    #[serde(default = "default_max_input_tokens")]
    pub max_input_tokens: usize,

    // @field: Per-chunk token ceiling, kept under the input limit for headroom
    #[serde(default = "default_chunk_token_limit")]
    pub chunk_token_limit: usize,

    // @field: Maximum concurrent Stage-1 chunk summarizations
    #[serde(default = "default_max_concurrent_chunks")]
    pub max_concurrent_chunks: usize,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_endpoint() -> String {
    "http://localhost:8080".to_string()
}

fn default_checkpoint() -> String {
    "facebook/bart-large-cnn".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_max_input_tokens() -> usize {
    1024
}

fn default_chunk_token_limit() -> usize {
    900
}

fn default_max_concurrent_chunks() -> usize {
    4
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            checkpoint: default_checkpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_input_tokens: default_max_input_tokens(),
            chunk_token_limit: default_chunk_token_limit(),
            max_concurrent_chunks: default_max_concurrent_chunks(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            summarizer: SummarizerConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config file as JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.model.endpoint)
            .map_err(|e| anyhow!("Invalid model server endpoint '{}': {}", self.model.endpoint, e))?;

        if self.model.checkpoint.trim().is_empty() {
            return Err(anyhow!("Model checkpoint must not be empty"));
        }

        if self.summarizer.max_input_tokens == 0 {
            return Err(anyhow!("max_input_tokens must be greater than zero"));
        }

        if self.summarizer.chunk_token_limit == 0 {
            return Err(anyhow!("chunk_token_limit must be greater than zero"));
        }

        if self.summarizer.chunk_token_limit > self.summarizer.max_input_tokens {
            return Err(anyhow!(
                "chunk_token_limit ({}) must not exceed max_input_tokens ({})",
                self.summarizer.chunk_token_limit,
                self.summarizer.max_input_tokens
            ));
        }

        if self.summarizer.max_concurrent_chunks == 0 {
            return Err(anyhow!("max_concurrent_chunks must be greater than zero"));
        }

        Ok(())
    }
}
