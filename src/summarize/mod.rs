/*!
 * Hierarchical abstractive summarization.
 *
 * This module contains the summarization pipeline:
 * - `chunking`: token-bounded chunk construction with forced structural breaks
 * - `coverage`: lexical concept-coverage metric for observability
 * - `engine`: the orchestrator deciding single-pass vs multi-stage
 */

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

pub mod chunking;
pub mod coverage;
pub mod engine;

pub use chunking::{Chunk, ChunkBuilder};
pub use coverage::coverage_score;
pub use engine::{Summarizer, SummarizerOptions, SummaryReport, SummaryStrategy};

/// Length tier of the requested summary
///
/// Each level maps to the target word count passed to every terminal
/// generation call.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLevel {
    /// Short abstract, around 60 words
    Abstract,
    /// Standard summary, around 130 words
    #[default]
    Summary,
    /// Long-form article summary, around 250 words
    Article,
}

impl SummaryLevel {
    /// Target word count for this level
    pub fn target_words(&self) -> usize {
        match self {
            Self::Abstract => 60,
            Self::Summary => 130,
            Self::Article => 250,
        }
    }

    // @returns: Lowercase level identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Abstract => "abstract".to_string(),
            Self::Summary => "summary".to_string(),
            Self::Article => "article".to_string(),
        }
    }
}

// Implement Display trait for SummaryLevel
impl std::fmt::Display for SummaryLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for SummaryLevel
impl std::str::FromStr for SummaryLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "abstract" => Ok(Self::Abstract),
            "summary" => Ok(Self::Summary),
            "article" => Ok(Self::Article),
            _ => Err(anyhow!("Invalid summary level: {}", s)),
        }
    }
}
