//! Text segmentation into words, sentences, and paragraphs.
//!
//! Sentences split on runs of `.`, `!`, `?` via a character scan with
//! context-based protection: abbreviations, decimal numbers, single-letter
//! initials, and periods followed directly by a lowercase letter do not end
//! a sentence. Words are maximal `\w+` runs; paragraphs split on blank
//! lines.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::dictionaries::abbreviations::is_abbreviation;
use crate::document::{Document, Paragraph, Sentence, SentenceKind, Token};
use crate::word_lists::{IMPERATIVE_CUES, SUBORDINATING_CONJUNCTIONS};

/// Maximal runs of word characters.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Blank-line paragraph separator: newline, optional whitespace, newline.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Segment text into a typed [`Document`].
///
/// `extra_abbreviations` augments the built-in abbreviation dictionary for
/// sentence boundary detection. Empty or whitespace-only input yields a
/// document with no paragraphs; this is never an error.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn segment(text: &str, extra_abbreviations: &[String]) -> Document {
    let extras: HashSet<String> = extra_abbreviations
        .iter()
        .map(|a| a.trim_matches('.').to_lowercase())
        .collect();

    let character_count = text.chars().filter(|c| !c.is_whitespace()).count();

    let paragraphs = split_paragraphs(text)
        .into_iter()
        .map(|p| Paragraph {
            sentences: split_sentence_fragments(p, &extras)
                .into_iter()
                .map(build_sentence)
                .collect(),
        })
        .collect();

    Document {
        paragraphs,
        character_count,
    }
}

/// Extract normalized (lowercased) words as maximal `\w+` runs.
pub fn extract_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Split text into trimmed, non-empty paragraphs on blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Split one paragraph into trimmed sentence fragments.
///
/// A run of terminators splits once, at its end, so an ellipsis stays inside
/// its sentence. Fragments without a word character are discarded; text with
/// no terminator at all is one fragment.
fn split_sentence_fragments(text: &str, extras: &HashSet<String>) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);

        if is_terminator(ch) {
            let next = chars.get(i + 1).copied();
            if next.is_some_and(is_terminator) {
                // Inside a terminator run; boundary is at the run's end.
                i += 1;
                continue;
            }
            if is_boundary(&chars, i, extras) {
                push_fragment(&mut fragments, &current);
                current.clear();
            }
        }

        i += 1;
    }

    push_fragment(&mut fragments, &current);
    fragments
}

const fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Decide whether the terminator at `pos` ends a sentence.
fn is_boundary(chars: &[char], pos: usize, extras: &HashSet<String>) -> bool {
    if chars[pos] != '.' {
        return true;
    }

    // Decimal number: digit on both sides of the period
    if pos > 0
        && chars[pos - 1].is_ascii_digit()
        && chars.get(pos + 1).is_some_and(char::is_ascii_digit)
    {
        return false;
    }

    // Lowercase letter directly after the period: mid-token, as at the
    // first period of "e.g." or "a.m."
    if chars.get(pos + 1).is_some_and(|c| c.is_lowercase()) {
        return false;
    }

    let before = word_before(chars, pos);
    if before.is_empty() {
        return true;
    }
    if is_abbreviation(&before) || extras.contains(before.trim_matches('.').to_lowercase().as_str())
    {
        return false;
    }

    // Single uppercase letter: an initial, as in "J. K. Rowling"
    if before.chars().count() == 1 && before.chars().next().is_some_and(char::is_uppercase) {
        return false;
    }

    true
}

/// Collect the word immediately before `pos`, internal periods included.
fn word_before(chars: &[char], pos: usize) -> String {
    let mut i = pos;

    // Skip back past periods and whitespace
    while i > 0 {
        i -= 1;
        if !chars[i].is_whitespace() && chars[i] != '.' {
            break;
        }
    }

    let mut word = Vec::new();
    loop {
        if chars[i].is_alphanumeric() || chars[i] == '.' {
            word.push(chars[i]);
        } else {
            break;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }

    word.reverse();
    word.into_iter().collect()
}

fn push_fragment(fragments: &mut Vec<String>, current: &str) {
    let trimmed = current.trim();
    if WORD_PATTERN.is_match(trimmed) {
        fragments.push(trimmed.to_string());
    }
}

fn build_sentence(text: String) -> Sentence {
    let tokens: Vec<Token> = WORD_PATTERN
        .find_iter(&text)
        .map(|m| Token::new(m.as_str()))
        .collect();
    let kind = classify(&text);
    let complexity = complexity_score(&text, &tokens);
    Sentence {
        text,
        tokens,
        kind,
        complexity,
    }
}

/// Classify a sentence by terminal punctuation and leading word.
fn classify(text: &str) -> SentenceKind {
    if text.ends_with('?') {
        return SentenceKind::Interrogative;
    }
    if text.ends_with('!') {
        return SentenceKind::Exclamatory;
    }

    // Leading word keeps apostrophes so "Don't" matches its cue
    let leading = text
        .split_whitespace()
        .next()
        .unwrap_or("")
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_lowercase();

    if IMPERATIVE_CUES.contains(leading.as_str()) {
        SentenceKind::Imperative
    } else {
        SentenceKind::Declarative
    }
}

/// Structural complexity in `[0, 1]` from length, punctuation, and clauses.
fn complexity_score(text: &str, tokens: &[Token]) -> f64 {
    let mut score = match tokens.len() {
        n if n > 25 => 0.3,
        n if n > 15 => 0.2,
        n if n > 10 => 0.1,
        _ => 0.0,
    };

    let commas = text.matches(',').count();
    let semicolons = text.matches(';').count();
    let colons = text.matches(':').count();
    score += (commas as f64).mul_add(0.05, ((semicolons + colons) as f64) * 0.10);

    if tokens
        .iter()
        .any(|t| SUBORDINATING_CONJUNCTIONS.contains(t.normalized.as_str()))
    {
        score += 0.15;
    }

    score.min(1.0)
}
