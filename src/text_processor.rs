use std::collections::HashSet;
use once_cell::sync::Lazy;
use regex::Regex;

// @module: Text normalization, sentence splitting and deduplication

// @const: Runs of one or more period characters
static PERIOD_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.+").unwrap());

// @const: Runs of whitespace
static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// @const: Sentence boundary: a terminal mark followed by whitespace
static SENTENCE_BOUNDARY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Clean raw input text before any model call.
///
/// Removes U+FFFD replacement characters left behind by lossy decoding
/// (Rust strings are already valid UTF-8, so no byte dropping is needed),
/// collapses runs of periods into a single period, collapses runs of
/// whitespace into a single space, and trims the result. Pure function,
/// always returns a string, possibly empty.
pub fn clean_text(text: &str) -> String {
    let text = text.replace('\u{FFFD}', "");
    let text = PERIOD_RUN_REGEX.replace_all(&text, ".");
    let text = WHITESPACE_RUN_REGEX.replace_all(&text, " ");
    text.trim().to_string()
}

/// Split cleaned text into an ordered sequence of sentences.
///
/// A boundary is a sentence-terminal mark (`.`, `!`, `?`) followed by
/// whitespace; the mark stays with its sentence, the whitespace is consumed.
/// Empty fragments are dropped after trimming. Text without any terminal
/// punctuation is returned as a single sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut last = 0;
    for boundary in SENTENCE_BOUNDARY_REGEX.find_iter(text) {
        // The terminal mark is a single ASCII byte at the match start
        let end = boundary.start() + 1;
        let fragment = text[last..end].trim();
        if !fragment.is_empty() {
            sentences.push(fragment.to_string());
        }
        last = boundary.end();
    }
    let tail = text[last..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Remove near-identical sentences, keeping first occurrences in order.
///
/// Two sentences are considered duplicates when they normalize to the same
/// key: trimmed, trailing `.`/`!`/`?` stripped, trimmed again, lowercased.
/// Sentences whose key is empty are dropped entirely. Idempotent.
pub fn dedup_sentences(sentences: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(sentences.len());

    for sentence in sentences {
        let key = sentence
            .trim()
            .trim_end_matches(['.', '!', '?'])
            .trim()
            .to_lowercase();
        if !key.is_empty() && seen.insert(key) {
            unique.push(sentence.clone());
        }
    }

    unique
}
