use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// @module: Lexical concept-coverage metric

// @const: Concept token: lowercase alphabetic word of length >= 5
static CONCEPT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]{5,}\b").unwrap());

/// Extract the set of distinct concept tokens from a text span
fn concepts(text: &str) -> HashSet<String> {
    CONCEPT_REGEX
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Percentage of the source's distinct concept tokens that survive into the
/// summary.
///
/// A concept token is a lowercase alphabetic word of at least five letters.
/// Returns a value in [0, 100]; defined as 100.0 when the source has no
/// concept tokens at all. Diagnostic only, never alters pipeline output.
pub fn coverage_score(original_sentences: &[String], summary: &str) -> f64 {
    let original_concepts = concepts(&original_sentences.join(" "));
    if original_concepts.is_empty() {
        return 100.0;
    }

    let summary_concepts = concepts(summary);
    let shared = original_concepts.intersection(&summary_concepts).count();
    shared as f64 / original_concepts.len() as f64 * 100.0
}
