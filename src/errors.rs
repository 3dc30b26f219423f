/*!
 * Error types for the gistq summarization engine.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the model server
#[derive(Error, Debug)]
pub enum ModelError {
    /// Error when making a request to the model server fails
    #[error("Model request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing a model server response fails
    #[error("Failed to parse model response: {0}")]
    ParseError(String),

    /// Error returned by the model server itself
    #[error("Model server responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the server
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur while running the summarization pipeline
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// Error from the generation backend; any single failed model call
    /// aborts the whole pipeline, there is no partial result
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error in the application configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error from the model server
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Error from the summarization pipeline
    #[error("Summarization error: {0}")]
    Summarize(#[from] SummarizeError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
