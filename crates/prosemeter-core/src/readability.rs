//! Readability formulas over a metrics snapshot.
//!
//! Six standardized indices: Flesch Reading Ease, Flesch-Kincaid Grade,
//! Gunning Fog, SMOG, Coleman-Liau, and the Automated Readability Index.
//! Each score carries a raw (clamped) value, a 2-decimal rounding, and an
//! interpretation band. The five grade-style scores aggregate into a
//! consensus grade; Flesch Reading Ease is not a grade and stays out of it.
//!
//! A snapshot with zero words produces no scores and no consensus.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metrics::MetricsSnapshot;

/// One formula's result with its interpretation band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityScore {
    /// Display name of the formula.
    pub name: String,
    /// Clamped, unrounded value.
    pub raw: f64,
    /// Value rounded to 2 decimals.
    pub rounded: f64,
    /// Interpretation band label.
    pub label: String,
    /// One-line description of the band.
    pub description: String,
}

/// Aggregate of the grade-style scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConsensusGrade {
    /// Mean of the grade-style scores, rounded to 2 decimals.
    pub average: f64,
    /// Lowest grade among the scores.
    pub min: f64,
    /// Highest grade among the scores.
    pub max: f64,
    /// How many grade-style scores went into the aggregate.
    pub grades_used: usize,
}

/// All six formula results plus the consensus grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease, clamped to `[0, 100]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flesch_reading_ease: Option<ReadabilityScore>,
    /// Flesch-Kincaid Grade, floored at 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flesch_kincaid_grade: Option<ReadabilityScore>,
    /// Gunning Fog index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gunning_fog: Option<ReadabilityScore>,
    /// SMOG index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smog: Option<ReadabilityScore>,
    /// Coleman-Liau index, floored at 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coleman_liau: Option<ReadabilityScore>,
    /// Automated Readability Index, floored at 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automated_readability_index: Option<ReadabilityScore>,
    /// Consensus over the grade-style scores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consensus: Option<ConsensusGrade>,
}

/// Score a metrics snapshot with all six formulas.
#[tracing::instrument(skip_all, fields(words = metrics.word_count))]
pub fn score(metrics: &MetricsSnapshot) -> ReadabilityReport {
    if metrics.word_count == 0 {
        return ReadabilityReport {
            flesch_reading_ease: None,
            flesch_kincaid_grade: None,
            gunning_fog: None,
            smog: None,
            coleman_liau: None,
            automated_readability_index: None,
            consensus: None,
        };
    }

    let flesch = make_score(
        "Flesch Reading Ease",
        flesch_reading_ease(metrics),
        flesch_band(flesch_reading_ease(metrics)),
    );
    let kincaid = grade_score("Flesch-Kincaid Grade", flesch_kincaid_grade(metrics));
    let fog = grade_score("Gunning Fog Index", gunning_fog(metrics));
    let smog = grade_score("SMOG Index", smog_index(metrics));
    let coleman = grade_score("Coleman-Liau Index", coleman_liau(metrics));
    let ari = grade_score("Automated Readability Index", automated_readability_index(metrics));

    let consensus = consensus(&[
        kincaid.rounded,
        fog.rounded,
        smog.rounded,
        coleman.rounded,
        ari.rounded,
    ]);

    ReadabilityReport {
        flesch_reading_ease: Some(flesch),
        flesch_kincaid_grade: Some(kincaid),
        gunning_fog: Some(fog),
        smog: Some(smog),
        coleman_liau: Some(coleman),
        automated_readability_index: Some(ari),
        consensus,
    }
}

/// Aggregate grade-style scores into a consensus.
///
/// Returns `None` when no grades were computed; an undefined consensus is
/// not a zero consensus.
pub fn consensus(grades: &[f64]) -> Option<ConsensusGrade> {
    if grades.is_empty() {
        return None;
    }

    let sum: f64 = grades.iter().sum();
    let min = grades.iter().copied().fold(f64::INFINITY, f64::min);
    let max = grades.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(ConsensusGrade {
        average: round2(sum / grades.len() as f64),
        min: round2(min),
        max: round2(max),
        grades_used: grades.len(),
    })
}

/// `206.835 - 1.015 * AWS - 84.6 * ASW`, clamped to `[0, 100]`.
fn flesch_reading_ease(m: &MetricsSnapshot) -> f64 {
    let raw = 206.835
        - 1.015f64.mul_add(
            m.avg_words_per_sentence,
            84.6 * m.avg_syllables_per_word,
        );
    raw.clamp(0.0, 100.0)
}

/// `0.39 * AWS + 11.8 * ASW - 15.59`, floored at 0.
fn flesch_kincaid_grade(m: &MetricsSnapshot) -> f64 {
    let raw =
        0.39f64.mul_add(m.avg_words_per_sentence, 11.8 * m.avg_syllables_per_word) - 15.59;
    raw.max(0.0)
}

/// `0.4 * (AWS + percentage of complex words)`.
fn gunning_fog(m: &MetricsSnapshot) -> f64 {
    0.4 * (m.avg_words_per_sentence + m.percentage_complex_words)
}

/// `1.0430 * sqrt(complex * 30 / sentences) + 3.1291`.
fn smog_index(m: &MetricsSnapshot) -> f64 {
    let polysyllables_per_30 = (m.complex_word_count * 30) as f64 / m.sentence_count as f64;
    1.043f64.mul_add(polysyllables_per_30.sqrt(), 3.1291)
}

/// `0.0588 * L - 0.296 * S - 15.8`, floored at 0, where `L` and `S` are
/// characters and sentences per 100 words.
fn coleman_liau(m: &MetricsSnapshot) -> f64 {
    let l = 100.0 * m.character_count as f64 / m.word_count as f64;
    let s = 100.0 * m.sentence_count as f64 / m.word_count as f64;
    let raw = 0.0588f64.mul_add(l, -0.296 * s) - 15.8;
    raw.max(0.0)
}

/// `4.71 * ACW + 0.5 * AWS - 21.43`, floored at 0.
fn automated_readability_index(m: &MetricsSnapshot) -> f64 {
    let raw = 4.71f64.mul_add(
        m.avg_characters_per_word,
        0.5 * m.avg_words_per_sentence,
    ) - 21.43;
    raw.max(0.0)
}

fn grade_score(name: &str, raw: f64) -> ReadabilityScore {
    make_score(name, raw, grade_band(raw))
}

fn make_score(name: &str, raw: f64, band: (&'static str, &'static str)) -> ReadabilityScore {
    ReadabilityScore {
        name: name.to_string(),
        raw,
        rounded: round2(raw),
        label: band.0.to_string(),
        description: band.1.to_string(),
    }
}

/// Flesch Reading Ease bands at 90/80/70/60/50/30/0.
fn flesch_band(score: f64) -> (&'static str, &'static str) {
    if score >= 90.0 {
        ("Very Easy", "Easily understood by an average 11-year-old")
    } else if score >= 80.0 {
        ("Easy", "Conversational English for most readers")
    } else if score >= 70.0 {
        ("Fairly Easy", "Easily understood by teenagers")
    } else if score >= 60.0 {
        ("Standard", "Plain English, understood by most adults")
    } else if score >= 50.0 {
        ("Fairly Difficult", "Requires some secondary education")
    } else if score >= 30.0 {
        ("Difficult", "Best understood by college students")
    } else {
        ("Very Difficult", "Best understood by university graduates")
    }
}

/// Shared band table for the grade-style scores.
fn grade_band(grade: f64) -> (&'static str, &'static str) {
    if grade <= 6.0 {
        ("Elementary", "Readable at an elementary school level")
    } else if grade <= 8.0 {
        ("Middle School", "Readable at a middle school level")
    } else if grade <= 12.0 {
        ("High School", "Readable at a high school level")
    } else if grade <= 16.0 {
        ("College", "Requires college-level reading ability")
    } else {
        (
            "Professional/Graduate",
            "Requires specialist or graduate-level reading ability",
        )
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
