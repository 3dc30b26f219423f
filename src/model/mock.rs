/*!
 * Mock model implementation for testing.
 *
 * This module provides a mock summarization backend that simulates different
 * behaviors:
 * - `MockModel::working()` - Always succeeds with a deterministic summary
 * - `MockModel::failing()` - Always fails with an error
 * - `MockModel::empty()` - Succeeds with an empty summary
 *
 * Token counting is word-based (whitespace-separated words times a
 * configurable multiplier) so tests can construct inputs with exact token
 * counts without a real tokenizer.
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ModelError;
use crate::model::{GenerationParams, SummarizationModel};

/// Behavior mode for the mock model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a deterministic excerpt-style summary
    Working,
    /// Always fails with an error
    Failing,
    /// Returns an empty summary
    Empty,
}

/// A single recorded generation call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// The text passed to the call
    pub text: String,
    /// The decoding parameters passed to the call
    pub params: GenerationParams,
}

/// Mock summarization model for testing pipeline behavior
#[derive(Debug)]
pub struct MockModel {
    /// Behavior mode
    behavior: MockBehavior,
    /// Tokens counted per whitespace-separated word
    tokens_per_word: usize,
    /// Number of count_tokens calls made
    tokenize_calls: Arc<AtomicUsize>,
    /// Number of generate calls made
    generate_calls: Arc<AtomicUsize>,
    /// Every generate call, in order
    recorded_calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockModel {
    /// Create a new mock model with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            tokens_per_word: 1,
            tokenize_calls: Arc::new(AtomicUsize::new(0)),
            generate_calls: Arc::new(AtomicUsize::new(0)),
            recorded_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock model that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock model that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns empty summaries
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Set how many tokens each whitespace-separated word counts as
    pub fn with_tokens_per_word(mut self, tokens_per_word: usize) -> Self {
        self.tokens_per_word = tokens_per_word.max(1);
        self
    }

    /// Number of count_tokens calls made so far
    pub fn tokenize_call_count(&self) -> usize {
        self.tokenize_calls.load(Ordering::SeqCst)
    }

    /// Number of generate calls made so far
    pub fn generate_call_count(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    /// Snapshot of every generate call made so far, in call order
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.recorded_calls.lock().unwrap().clone()
    }

    /// Deterministic stand-in summary: the first `max_length` "tokens"
    /// (words) of the input, after the same truncation a real backend would
    /// apply to over-long input.
    fn excerpt(&self, text: &str, params: &GenerationParams) -> String {
        let words: Vec<&str> = text.split_whitespace().collect();
        let input_limit = params
            .truncate_input_to
            .map(|tokens| tokens / self.tokens_per_word)
            .unwrap_or(words.len());
        let output_limit = (params.max_length as usize / self.tokens_per_word).max(1);
        words
            .into_iter()
            .take(input_limit)
            .take(output_limit)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl SummarizationModel for MockModel {
    fn model_name(&self) -> &str {
        "mock"
    }

    async fn count_tokens(&self, text: &str) -> Result<usize, ModelError> {
        self.tokenize_calls.fetch_add(1, Ordering::SeqCst);
        Ok(text.split_whitespace().count() * self.tokens_per_word)
    }

    async fn generate(&self, text: &str, params: &GenerationParams) -> Result<String, ModelError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        self.recorded_calls.lock().unwrap().push(RecordedCall {
            text: text.to_string(),
            params: params.clone(),
        });

        match self.behavior {
            MockBehavior::Working => Ok(self.excerpt(text, params)),
            MockBehavior::Empty => Ok(String::new()),
            MockBehavior::Failing => Err(ModelError::RequestFailed(
                "Mock model configured to fail".to_string(),
            )),
        }
    }

    async fn test_connection(&self) -> Result<(), ModelError> {
        match self.behavior {
            MockBehavior::Failing => Err(ModelError::ConnectionError(
                "Mock model configured to fail".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
