//! Top-level analysis orchestration.
//!
//! [`analyze`] runs the full pipeline: optional markdown stripping,
//! segmentation, the metrics snapshot, then each report section its
//! options enable. Sections that are switched off serialize away
//! entirely rather than appearing as empty objects.

use std::collections::{BTreeMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisResult;
use crate::frequency::{self, LexicalDiversity, WordFrequency};
use crate::metrics::MetricsSnapshot;
use crate::readability::{self, ReadabilityReport};
use crate::reading_time::{self, ReadingTimeEstimate, default_reading_speeds};
use crate::word_lists::STOP_WORDS;
use crate::{markdown, segment};

/// Knobs for a single analysis run.
///
/// [`AnalysisOptions::default`] enables every section with the built-in
/// stop word list, a minimum word length of 2 for frequency ranking, and
/// the four standard reading speed presets.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Compute readability formulas and the consensus grade.
    pub include_readability: bool,
    /// Compute word frequency and lexical diversity.
    pub include_frequency: bool,
    /// Strip markdown to prose before segmenting.
    pub strip_markdown: bool,
    /// Words excluded from frequency ranking.
    pub stop_words: HashSet<String>,
    /// Shortest word (in characters) eligible for frequency ranking.
    pub min_word_length: usize,
    /// Maximum number of entries in the frequency table.
    pub max_frequency_results: usize,
    /// Reading speed presets as `(name, words per minute)` pairs.
    pub reading_speeds: Vec<(String, usize)>,
    /// Abbreviations (beyond the built-in set) whose trailing period
    /// does not end a sentence.
    pub extra_abbreviations: Vec<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            include_readability: true,
            include_frequency: true,
            strip_markdown: false,
            stop_words: STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            min_word_length: 2,
            max_frequency_results: 10,
            reading_speeds: default_reading_speeds(),
            extra_abbreviations: Vec::new(),
        }
    }
}

/// Word frequency section of a [`Report`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FrequencyReport {
    /// Most frequent words, ranked.
    pub top_words: Vec<WordFrequency>,
    /// Type-token ratio over all words (stop words included).
    pub diversity: LexicalDiversity,
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    /// Raw counts and averages every other section derives from.
    pub metrics: MetricsSnapshot,
    /// Readability formulas, present unless disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityReport>,
    /// Word frequency and diversity, present unless disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<FrequencyReport>,
    /// Reading time per speed preset, keyed by preset name.
    pub reading_time: BTreeMap<String, ReadingTimeEstimate>,
}

/// Run the full analysis pipeline over `text`.
///
/// Analysis is deterministic: the same text and options always produce
/// an identical report. Fails only when a reading speed preset is zero
/// words per minute.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze(text: &str, options: &AnalysisOptions) -> AnalysisResult<Report> {
    let prose = if options.strip_markdown {
        markdown::strip_to_prose(text)
    } else {
        text.to_string()
    };

    let document = segment::segment(&prose, &options.extra_abbreviations);
    let metrics = MetricsSnapshot::from_document(&document);

    let readability = if options.include_readability {
        Some(readability::score(&metrics))
    } else {
        None
    };

    let frequency = if options.include_frequency {
        let words: Vec<&str> = document.tokens().map(|t| t.normalized.as_str()).collect();
        Some(FrequencyReport {
            top_words: frequency::top_words(
                &words,
                &options.stop_words,
                options.min_word_length,
                options.max_frequency_results,
            ),
            diversity: frequency::lexical_diversity(&words),
        })
    } else {
        None
    };

    let reading_time = reading_time::estimate(metrics.word_count, &options.reading_speeds)?;

    tracing::debug!(
        words = metrics.word_count,
        sentences = metrics.sentence_count,
        "analysis complete"
    );

    Ok(Report {
        metrics,
        readability,
        frequency,
        reading_time,
    })
}
