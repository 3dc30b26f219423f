/*!
 * Model backends for abstractive summarization.
 *
 * This module contains the interface to the pretrained sequence-to-sequence
 * model and its tokenizer, treated as one opaque capability:
 * - `bart_server`: HTTP client for a local model server hosting the checkpoint
 * - `mock`: deterministic in-process model for testing
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ModelError;

/// Decoding parameters for a single generation call.
///
/// Decoding is deterministic beam search (no sampling) so that output is
/// reproducible for a fixed model and input; repeated 3-grams are suppressed
/// to reduce redundant phrasing.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Minimum number of tokens to generate
    pub min_length: u32,
    /// Maximum number of tokens to generate
    pub max_length: u32,
    /// Number of beams for beam search
    pub num_beams: u32,
    /// Size of n-grams that must not repeat in the output
    pub no_repeat_ngram_size: u32,
    /// Length penalty applied during beam search
    pub length_penalty: f32,
    /// Whether beam search stops as soon as all beams are finished
    pub early_stopping: bool,
    /// Truncate input to this many tokens at generation time, if set.
    /// Chunking upstream is responsible for avoiding the truncation ever
    /// biting; when it does bite it is accepted lossy behavior, not an error.
    pub truncate_input_to: Option<usize>,
}

impl GenerationParams {
    /// Build decoding parameters from a target word count.
    ///
    /// Converts words to a token length window using the heuristic ratio of
    /// roughly 1 word to 1.3-1.5 tokens: the minimum is `words * 0.9 * 1.3`
    /// tokens and the maximum is `words * 1.3 * 1.5` tokens, both floored.
    pub fn for_target_words(target_words: usize) -> Self {
        let min_length = (target_words as f64 * 0.9 * 1.3) as u32;
        let max_length = (target_words as f64 * 1.3 * 1.5) as u32;
        Self {
            min_length,
            max_length,
            num_beams: 4,
            no_repeat_ngram_size: 3,
            length_penalty: 1.0,
            early_stopping: true,
            truncate_input_to: None,
        }
    }

    /// Set input truncation to the model's maximum input length
    pub fn with_input_truncation(mut self, max_input_tokens: usize) -> Self {
        self.truncate_input_to = Some(max_input_tokens);
        self
    }
}

/// Common trait for summarization model backends
///
/// The tokenizer and the generator are one capability: `count_tokens` must
/// apply exactly the tokenization `generate` will apply, since chunking
/// decisions depend on the counts being accurate. A mismatch risks silently
/// truncating content the budgeter believed fit.
#[async_trait]
pub trait SummarizationModel: Send + Sync + Debug {
    /// Name of the pretrained checkpoint this backend serves
    fn model_name(&self) -> &str;

    /// Count the model input tokens a text span would occupy
    ///
    /// No truncation is applied during measurement.
    ///
    /// # Arguments
    /// * `text` - The text span to measure
    ///
    /// # Returns
    /// * `Result<usize, ModelError>` - The token count or an error
    async fn count_tokens(&self, text: &str) -> Result<usize, ModelError>;

    /// Generate a summary of the given text
    ///
    /// # Arguments
    /// * `text` - The source text to summarize
    /// * `params` - Decoding parameters for the call
    ///
    /// # Returns
    /// * `Result<String, ModelError>` - The generated summary or an error
    async fn generate(&self, text: &str, params: &GenerationParams) -> Result<String, ModelError>;

    /// Test the connection to the backend
    ///
    /// # Returns
    /// * `Result<(), ModelError>` - Ok if the backend is reachable, or an error
    async fn test_connection(&self) -> Result<(), ModelError>;
}

pub mod bart_server;
pub mod mock;
