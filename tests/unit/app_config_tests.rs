/*!
 * Tests for application configuration loading and validation
 */

use std::fs;
use tempfile::TempDir;

use gistq::app_config::{Config, LogLevel};
use gistq::summarize::SummaryLevel;

/// Test that the default configuration is valid
#[test]
fn test_config_default_shouldValidate() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

/// Test the default model and pipeline limits
#[test]
fn test_config_default_shouldCarryReferenceLimits() {
    let config = Config::default();
    assert_eq!(config.summarizer.max_input_tokens, 1024);
    assert_eq!(config.summarizer.chunk_token_limit, 900);
    assert_eq!(config.model.checkpoint, "facebook/bart-large-cnn");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test loading a partial config file with defaults filling the gaps
#[test]
fn test_config_fromFile_withPartialJson_shouldApplyDefaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "model": { "endpoint": "http://localhost:9000" }, "log_level": "debug" }"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.model.endpoint, "http://localhost:9000");
    assert_eq!(config.model.checkpoint, "facebook/bart-large-cnn");
    assert_eq!(config.summarizer.chunk_token_limit, 900);
    assert_eq!(config.log_level, LogLevel::Debug);
}

/// Test that a missing file is an error
#[test]
fn test_config_fromFile_withMissingFile_shouldFail() {
    let dir = TempDir::new().unwrap();
    let result = Config::from_file(dir.path().join("nope.json"));
    assert!(result.is_err());
}

/// Test endpoint validation
#[test]
fn test_config_validate_withInvalidEndpoint_shouldFail() {
    let mut config = Config::default();
    config.model.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
}

/// Test that the chunk ceiling must stay under the input budget
#[test]
fn test_config_validate_withChunkLimitOverInputBudget_shouldFail() {
    let mut config = Config::default();
    config.summarizer.chunk_token_limit = 2048;
    assert!(config.validate().is_err());
}

/// Test rejection of zero-valued limits
#[test]
fn test_config_validate_withZeroLimits_shouldFail() {
    let mut config = Config::default();
    config.summarizer.max_input_tokens = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.summarizer.max_concurrent_chunks = 0;
    assert!(config.validate().is_err());
}

/// Test serde representation of summary levels
#[test]
fn test_summary_level_serde_shouldUseLowercaseNames() {
    let level: SummaryLevel = serde_json::from_str("\"abstract\"").unwrap();
    assert_eq!(level, SummaryLevel::Abstract);
    assert_eq!(serde_json::to_string(&SummaryLevel::Article).unwrap(), "\"article\"");
}
