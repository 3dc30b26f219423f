/*!
 * # GistQ - Hierarchical Abstractive Summarization
 *
 * A Rust library for length-tiered abstractive summarization of arbitrarily
 * long documents with a fixed-input-budget sequence-to-sequence model.
 *
 * ## Features
 *
 * - Text normalization, sentence splitting and near-duplicate removal
 * - Token-budgeted chunking with forced breaks at the document's thirds
 * - Single-pass summarization for documents that fit the model's input budget
 * - Multi-stage summarization (per-chunk summaries, concatenation, final
 *   compression) for documents that do not
 * - Lexical concept-coverage metric for observability
 * - Three summary levels: abstract (~60 words), summary (~130 words),
 *   article (~250 words)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `text_processor`: Text cleaning, sentence splitting and deduplication
 * - `summarize`: The summarization pipeline:
 *   - `summarize::chunking`: Token-bounded chunk construction
 *   - `summarize::coverage`: Coverage metric
 *   - `summarize::engine`: Single-pass vs multi-stage orchestration
 * - `model`: Backends exposing the model/tokenizer capability:
 *   - `model::bart_server`: HTTP client for a local model server
 *   - `model::mock`: Deterministic mock backend for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod model;
pub mod summarize;
pub mod text_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ModelError, SummarizeError};
pub use model::{GenerationParams, SummarizationModel};
pub use summarize::{Summarizer, SummarizerOptions, SummaryLevel, SummaryReport, SummaryStrategy};
pub use text_processor::{clean_text, dedup_sentences, split_sentences};
