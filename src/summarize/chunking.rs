/*!
 * Token-bounded chunk construction for long documents.
 *
 * A chunk is a contiguous, ordered group of sentences whose combined token
 * count stays under a ceiling left deliberately below the model's hard input
 * limit. Breaks are additionally forced at the document's structural thirds
 * so that no single chunk absorbs a disproportionate share of the beginning,
 * middle, or end; that balance is what lets the final compression stage see
 * the whole document.
 */

use crate::errors::ModelError;
use crate::model::SummarizationModel;

/// A contiguous ordered group of sentences bounded by the token ceiling
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// The sentences of this chunk, in document order
    pub sentences: Vec<String>,
    /// Combined token count of the sentences
    pub token_count: usize,
}

impl Chunk {
    /// The chunk's sentences joined into one text span
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }
}

/// Builds token-bounded chunks from an ordered sentence sequence
pub struct ChunkBuilder<'a> {
    /// Model backend used to measure sentence token counts
    model: &'a dyn SummarizationModel,
    /// Hard per-chunk token ceiling
    token_limit: usize,
}

impl<'a> ChunkBuilder<'a> {
    /// Create a new chunk builder with the given token ceiling
    pub fn new(model: &'a dyn SummarizationModel, token_limit: usize) -> Self {
        Self { model, token_limit }
    }

    /// Partition sentences into ordered chunks.
    ///
    /// Walks sentences in order keeping a running token count. A chunk closes
    /// when the next sentence would push it over the ceiling, or when the
    /// walk reaches a forced break index (total/3 and 2*total/3) with a
    /// non-empty chunk open. Concatenating the output in order reconstructs
    /// the input exactly; boundaries are monotone, nothing is reordered or
    /// dropped. A single sentence that alone exceeds the ceiling still
    /// becomes its own chunk; the generation call truncates it later.
    pub async fn build(&self, sentences: &[String]) -> Result<Vec<Chunk>, ModelError> {
        let total = sentences.len();
        // Forced breaks at the 33% and 66% points, computed from sentence
        // count rather than tokens; uneven sentence lengths can still skew
        // chunk sizes and that is accepted.
        let break_points = [total / 3, 2 * total / 3];

        let mut chunks = Vec::new();
        let mut current = Chunk {
            sentences: Vec::new(),
            token_count: 0,
        };

        for (idx, sentence) in sentences.iter().enumerate() {
            let sentence_tokens = self.model.count_tokens(sentence).await?;

            // Force a chunk break at major sections
            if break_points.contains(&idx) && !current.sentences.is_empty() {
                chunks.push(std::mem::replace(
                    &mut current,
                    Chunk {
                        sentences: Vec::new(),
                        token_count: 0,
                    },
                ));
            }

            if current.token_count + sentence_tokens > self.token_limit
                && !current.sentences.is_empty()
            {
                chunks.push(std::mem::replace(
                    &mut current,
                    Chunk {
                        sentences: vec![sentence.clone()],
                        token_count: sentence_tokens,
                    },
                ));
            } else {
                current.sentences.push(sentence.clone());
                current.token_count += sentence_tokens;
            }
        }

        if !current.sentences.is_empty() {
            chunks.push(current);
        }

        Ok(chunks)
    }
}
