//! Curated word lists for text analysis.
//!
//! The default stop-word set for frequency filtering, imperative cue words
//! for sentence classification, and subordinating conjunctions for sentence
//! complexity scoring.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Default English stop words excluded from frequency tables.
///
/// Callers can replace or extend this set through
/// [`AnalysisOptions`](crate::AnalysisOptions).
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "up", "out", "about", "into", "over", "after", "before", "between", "through",
        "during", "that", "this", "these", "those", "it", "its", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "do", "does", "did", "will", "would", "should",
        "could", "may", "might", "must", "can", "which", "who", "whom", "when", "where", "why",
        "how", "what", "if", "than", "then", "as", "so", "not", "no", "nor", "too", "very", "just",
        "also", "only", "own", "same", "such", "some", "any", "each", "every", "all", "both",
        "few", "more", "most", "other", "i", "me", "my", "we", "our", "you", "your", "he", "him",
        "his", "she", "her", "they", "them", "their",
    ]
    .into_iter()
    .collect()
});

/// Leading words that mark a period-terminated sentence as imperative.
///
/// Matched case-insensitively against the first whitespace-delimited word of
/// the sentence with apostrophes kept, so `don't` matches as written.
pub static IMPERATIVE_CUES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["please", "do", "don't", "let", "make", "help", "stop", "start"]
        .into_iter()
        .collect()
});

/// Subordinating conjunctions that raise a sentence's complexity score.
pub static SUBORDINATING_CONJUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["because", "although", "while", "since", "unless", "if"]
        .into_iter()
        .collect()
});
