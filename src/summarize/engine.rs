/*!
 * Hierarchical summarization orchestrator.
 *
 * This module contains the main Summarizer service, which owns the model
 * handle and decides between a single direct generation call and the
 * multi-stage path (per-chunk summaries, concatenation, final compression).
 */

use futures::stream::{self, StreamExt, TryStreamExt};
use log::{debug, info};
use std::sync::Arc;

use crate::app_config::SummarizerConfig;
use crate::errors::SummarizeError;
use crate::model::{GenerationParams, SummarizationModel};
use crate::text_processor::{clean_text, dedup_sentences, split_sentences};

use super::SummaryLevel;
use super::chunking::ChunkBuilder;
use super::coverage::coverage_score;

/// Which path the pipeline took for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStrategy {
    /// No sentences survived normalization; no model call was made
    Empty,
    /// The whole document fit in one generation call
    SinglePass,
    /// The document was chunked and compressed in stages
    MultiStage,
}

/// Result of one pipeline invocation
///
/// The coverage figure is diagnostic only; it never blocks or alters the
/// summary itself.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// The generated summary, empty when the input had no sentences
    pub summary: String,
    /// The path the pipeline took
    pub strategy: SummaryStrategy,
    /// Number of chunks built (0 outside the multi-stage path)
    pub chunk_count: usize,
    /// Concept coverage of the summary against the source, in [0, 100]
    pub coverage: f64,
}

/// Tunable limits for the pipeline
#[derive(Debug, Clone)]
pub struct SummarizerOptions {
    /// Maximum input tokens the model accepts in a single pass
    pub max_input_tokens: usize,
    /// Per-chunk token ceiling, kept under max_input_tokens for headroom
    pub chunk_token_limit: usize,
    /// Maximum number of Stage-1 chunk summaries generated concurrently
    pub max_concurrent_chunks: usize,
}

impl Default for SummarizerOptions {
    fn default() -> Self {
        Self {
            max_input_tokens: 1024,
            chunk_token_limit: 900,
            max_concurrent_chunks: 4,
        }
    }
}

impl From<&SummarizerConfig> for SummarizerOptions {
    fn from(config: &SummarizerConfig) -> Self {
        Self {
            max_input_tokens: config.max_input_tokens,
            chunk_token_limit: config.chunk_token_limit,
            max_concurrent_chunks: config.max_concurrent_chunks,
        }
    }
}

/// Summarization service owning the shared model handle
///
/// Constructed once at process start and passed by reference into
/// request-handling code; the model behind it is expensive to load and is
/// reused across all requests.
pub struct Summarizer {
    /// The model backend
    model: Arc<dyn SummarizationModel>,
    /// Pipeline limits
    options: SummarizerOptions,
}

impl Summarizer {
    /// Create a summarizer with default limits
    pub fn new(model: Arc<dyn SummarizationModel>) -> Self {
        Self::with_options(model, SummarizerOptions::default())
    }

    /// Create a summarizer with explicit limits
    pub fn with_options(model: Arc<dyn SummarizationModel>, options: SummarizerOptions) -> Self {
        Self { model, options }
    }

    /// The model backend this summarizer generates with
    pub fn model(&self) -> &dyn SummarizationModel {
        self.model.as_ref()
    }

    /// Summarize a document to the given level.
    ///
    /// Cleans and sentence-splits the text, removes duplicate sentences, then
    /// either summarizes in one pass or runs the multi-stage path depending
    /// on whether the deduplicated text exceeds the model's input budget.
    /// Empty input short-circuits to an empty report with zero model calls.
    /// Any failed model call aborts the whole request; there is no partial
    /// result.
    pub async fn summarize(
        &self,
        text: &str,
        level: SummaryLevel,
    ) -> Result<SummaryReport, SummarizeError> {
        let cleaned = clean_text(text);
        let sentences = split_sentences(&cleaned);
        let unique = dedup_sentences(&sentences);

        if unique.is_empty() {
            return Ok(SummaryReport {
                summary: String::new(),
                strategy: SummaryStrategy::Empty,
                chunk_count: 0,
                coverage: 100.0,
            });
        }

        let target_words = level.target_words();
        let full_text = unique.join(" ");
        let total_tokens = self.model.count_tokens(&full_text).await?;
        debug!(
            "Summarizing {} sentences ({} tokens) at level {}",
            unique.len(),
            total_tokens,
            level
        );

        if total_tokens > self.options.max_input_tokens {
            let (summary, chunk_count) = self.hierarchical_summarize(&unique, target_words).await?;
            let coverage = coverage_score(&unique, &summary);
            info!(
                "Final output: {} words | Coverage: {:.1}%",
                summary.split_whitespace().count(),
                coverage
            );
            Ok(SummaryReport {
                summary,
                strategy: SummaryStrategy::MultiStage,
                chunk_count,
                coverage,
            })
        } else {
            let summary = self.direct_summarize(&full_text, target_words).await?;
            let coverage = coverage_score(&unique, &summary);
            Ok(SummaryReport {
                summary,
                strategy: SummaryStrategy::SinglePass,
                chunk_count: 0,
                coverage,
            })
        }
    }

    /// Summarize text that fits within the model's input budget
    async fn direct_summarize(
        &self,
        text: &str,
        target_words: usize,
    ) -> Result<String, SummarizeError> {
        let params = GenerationParams::for_target_words(target_words)
            .with_input_truncation(self.options.max_input_tokens);
        Ok(self.model.generate(text, &params).await?)
    }

    /// Multi-stage summarization for documents over the input budget.
    ///
    /// Stage 1 summarizes each chunk with a deliberately generous word budget
    /// so intermediate summaries keep enough detail for the compression stage
    /// to select from. Stage 2 concatenates the chunk summaries in chunk
    /// order. Stage 3 compresses the combined text to the level target.
    async fn hierarchical_summarize(
        &self,
        sentences: &[String],
        target_words: usize,
    ) -> Result<(String, usize), SummarizeError> {
        let chunks = ChunkBuilder::new(self.model.as_ref(), self.options.chunk_token_limit)
            .build(sentences)
            .await?;
        let chunk_count = chunks.len();
        info!(
            "Processing {} sentences in {} chunks",
            sentences.len(),
            chunk_count
        );

        // Stage 1: per-chunk summaries, concurrently but in chunk order
        let words_per_chunk = ((target_words as f64 * 0.7).round() as usize).max(80);
        let chunk_summaries: Vec<String> = stream::iter(chunks.into_iter().enumerate())
            .map(|(index, chunk)| async move {
                let summary = self.direct_summarize(&chunk.text(), words_per_chunk).await?;
                debug!(
                    "Chunk {}/{}: {} words",
                    index + 1,
                    chunk_count,
                    summary.split_whitespace().count()
                );
                Ok::<String, SummarizeError>(summary)
            })
            .buffered(self.options.max_concurrent_chunks)
            .try_collect()
            .await?;

        // Stage 2: combine all chunk summaries
        let combined_text = chunk_summaries.join(" ");
        debug!(
            "Combined chunks = {} words",
            combined_text.split_whitespace().count()
        );

        // Stage 3: final compression to the target length
        let final_summary = self.direct_summarize(&combined_text, target_words).await?;
        Ok((final_summary, chunk_count))
    }
}
