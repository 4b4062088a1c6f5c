//! Aggregate counts and rates for a segmented document.
//!
//! A [`MetricsSnapshot`] is computed once per analysis and never mutated.
//! Sentence and paragraph counts floor at 1 so per-sentence averages stay
//! defined; every other rate guards its denominator and reports 0 instead of
//! dividing by zero.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Immutable aggregate counts derived from a [`Document`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricsSnapshot {
    /// Total words.
    pub word_count: usize,
    /// Total sentences, floored at 1.
    pub sentence_count: usize,
    /// Total paragraphs, floored at 1.
    pub paragraph_count: usize,
    /// Non-whitespace characters in the analyzed text.
    pub character_count: usize,
    /// Total syllables across all words.
    pub syllable_count: usize,
    /// Words of 3 or more syllables.
    pub complex_word_count: usize,
    /// Words longer than 6 characters.
    pub long_word_count: usize,
    /// `word_count / sentence_count`, rounded to 2 decimals.
    pub avg_words_per_sentence: f64,
    /// `syllable_count / word_count`, rounded to 2 decimals.
    pub avg_syllables_per_word: f64,
    /// `character_count / word_count`, rounded to 2 decimals.
    pub avg_characters_per_word: f64,
    /// `100 * complex_word_count / word_count`, rounded to 2 decimals.
    pub percentage_complex_words: f64,
}

impl MetricsSnapshot {
    /// Aggregate a segmented document into a snapshot.
    #[tracing::instrument(skip_all, fields(words = document.word_count()))]
    pub fn from_document(document: &Document) -> Self {
        let word_count = document.word_count();
        let sentence_count = document.sentence_count().max(1);
        let paragraph_count = document.paragraph_count().max(1);
        let character_count = document.character_count;
        let syllable_count = document.syllable_count();
        let complex_word_count = document.tokens().filter(|t| t.is_complex()).count();
        let long_word_count = document.tokens().filter(|t| t.is_long()).count();

        Self {
            word_count,
            sentence_count,
            paragraph_count,
            character_count,
            syllable_count,
            complex_word_count,
            long_word_count,
            avg_words_per_sentence: round2(ratio(word_count, sentence_count)),
            avg_syllables_per_word: round2(ratio(syllable_count, word_count)),
            avg_characters_per_word: round2(ratio(character_count, word_count)),
            percentage_complex_words: round2(100.0 * ratio(complex_word_count, word_count)),
        }
    }
}

/// Division guarded against a zero denominator.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
