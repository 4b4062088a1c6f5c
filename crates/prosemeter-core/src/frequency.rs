//! Word frequency, lexical diversity, and n-gram statistics.
//!
//! All functions take normalized (lowercased) words. Ranking is stable:
//! equal counts keep first-seen order.

use std::collections::{HashMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// One ranked entry in a top-words table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordFrequency {
    /// Normalized word.
    pub word: String,
    /// Occurrences in the text.
    pub count: usize,
    /// 1-based rank by descending count.
    pub rank: usize,
}

/// Type-token ratio with its interpretation band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LexicalDiversity {
    /// Distinct normalized words.
    pub unique_words: usize,
    /// Total words, repeats included.
    pub total_words: usize,
    /// `unique / total`, rounded to 2 decimals; 0 for an empty text.
    pub ratio: f64,
    /// Interpretation band label.
    pub label: String,
}

/// One ranked n-gram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NgramFrequency {
    /// Space-joined window of normalized words.
    pub ngram: String,
    /// Occurrences in the text.
    pub count: usize,
    /// 1-based rank by descending count.
    pub rank: usize,
}

/// Rank the most frequent words.
///
/// Words shorter than `min_word_length` characters and words in `stop_words`
/// are excluded before counting. Ties keep first-seen order.
pub fn top_words(
    words: &[&str],
    stop_words: &HashSet<String>,
    min_word_length: usize,
    limit: usize,
) -> Vec<WordFrequency> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for &word in words {
        if word.chars().count() < min_word_length || stop_words.contains(word) {
            continue;
        }
        if let Some(count) = counts.get_mut(word) {
            *count += 1;
        } else {
            counts.insert(word, 1);
            order.push(word);
        }
    }

    let mut ranked: Vec<(&str, usize)> = order.into_iter().map(|w| (w, counts[w])).collect();
    // sort_by is stable, so equal counts stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, (word, count))| WordFrequency {
            word: word.to_string(),
            count,
            rank: i + 1,
        })
        .collect()
}

/// Type-token ratio over all words, unfiltered.
pub fn lexical_diversity(words: &[&str]) -> LexicalDiversity {
    let total_words = words.len();
    let unique_words = words.iter().collect::<HashSet<_>>().len();
    let ratio = if total_words == 0 {
        0.0
    } else {
        unique_words as f64 / total_words as f64
    };

    LexicalDiversity {
        unique_words,
        total_words,
        ratio: round2(ratio),
        label: diversity_label(ratio).to_string(),
    }
}

/// Rank contiguous n-word windows by frequency.
///
/// Fails for `n == 0`; yields an empty table when the text has fewer than
/// `n` words.
pub fn top_ngrams(words: &[&str], n: usize, limit: usize) -> AnalysisResult<Vec<NgramFrequency>> {
    if n == 0 {
        return Err(AnalysisError::ZeroNgramSize);
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for window in words.windows(n) {
        let gram = window.join(" ");
        if let Some(count) = counts.get_mut(&gram) {
            *count += 1;
        } else {
            counts.insert(gram.clone(), 1);
            order.push(gram);
        }
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|gram| {
            let count = counts[gram.as_str()];
            (gram, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);

    Ok(ranked
        .into_iter()
        .enumerate()
        .map(|(i, (ngram, count))| NgramFrequency {
            ngram,
            count,
            rank: i + 1,
        })
        .collect())
}

/// Jaccard similarity of two vocabularies: `|A ∩ B| / |A ∪ B|`.
///
/// Two empty sets compare as 1.0 by convention.
pub fn jaccard_similarity(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Overlap coefficient of two vocabularies: `|A ∩ B| / min(|A|, |B|)`.
///
/// Two empty sets compare as 1.0; one empty set compares as 0.0.
pub fn overlap_coefficient(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / a.len().min(b.len()) as f64
}

fn diversity_label(ratio: f64) -> &'static str {
    if ratio > 0.7 {
        "Very High"
    } else if ratio > 0.5 {
        "High"
    } else if ratio > 0.3 {
        "Moderate"
    } else if ratio > 0.1 {
        "Low"
    } else {
        "Very Low"
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
