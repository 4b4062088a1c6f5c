//! Typed document model produced by segmentation.
//!
//! A [`Document`] owns paragraphs, paragraphs own sentences, sentences own
//! tokens. Everything is derived per call from the input text; nothing is
//! cached between analyses.

use crate::dictionaries::syllables::count_syllables;

/// A single word with its normalized form and syllable count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The word as it appeared in the text.
    pub surface: String,
    /// Lowercased form used for frequency and syllable purposes.
    pub normalized: String,
    /// Heuristic syllable count.
    pub syllables: usize,
}

impl Token {
    /// Build a token from a surface word, normalizing and counting syllables.
    pub fn new(surface: &str) -> Self {
        let normalized = surface.to_lowercase();
        let syllables = count_syllables(&normalized);
        Self {
            surface: surface.to_string(),
            normalized,
            syllables,
        }
    }

    /// Length of the word in characters.
    pub fn len(&self) -> usize {
        self.surface.chars().count()
    }

    /// Whether the surface form is empty.
    pub fn is_empty(&self) -> bool {
        self.surface.is_empty()
    }

    /// Words longer than 6 characters are long words.
    pub fn is_long(&self) -> bool {
        self.len() > 6
    }

    /// Words of 3 or more syllables are complex words.
    pub fn is_complex(&self) -> bool {
        self.syllables >= 3
    }
}

/// Terminal-punctuation classification of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    /// Ends in a period (or nothing) without an imperative cue.
    Declarative,
    /// Ends in `?`.
    Interrogative,
    /// Ends in `!`.
    Exclamatory,
    /// Led by an imperative cue word such as `please` or `stop`.
    Imperative,
}

/// One sentence with its tokens, kind, and complexity score.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Trimmed sentence text, terminal punctuation included.
    pub text: String,
    /// Tokens in order of appearance.
    pub tokens: Vec<Token>,
    /// Terminal-punctuation classification.
    pub kind: SentenceKind,
    /// Structural complexity in `[0, 1]`.
    pub complexity: f64,
}

impl Sentence {
    /// Number of words in the sentence.
    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    /// Length of the sentence text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A paragraph: an ordered run of sentences between blank lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    /// Sentences in order of appearance.
    pub sentences: Vec<Sentence>,
}

impl Paragraph {
    /// Number of sentences in the paragraph.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Total words across the paragraph's sentences.
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(Sentence::word_count).sum()
    }
}

/// The segmented input text.
///
/// A document with zero extractable words is legal; every derived rate
/// downstream defaults to 0 rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Paragraphs in order of appearance.
    pub paragraphs: Vec<Paragraph>,
    /// Non-whitespace character count of the analyzed text.
    pub character_count: usize,
}

impl Document {
    /// Flat view of all sentences in text order.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.paragraphs.iter().flat_map(|p| p.sentences.iter())
    }

    /// Flat view of all tokens in text order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences().flat_map(|s| s.tokens.iter())
    }

    /// Number of paragraphs (unfloored).
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Number of sentences (unfloored).
    pub fn sentence_count(&self) -> usize {
        self.paragraphs.iter().map(Paragraph::sentence_count).sum()
    }

    /// Total words across all sentences.
    pub fn word_count(&self) -> usize {
        self.paragraphs.iter().map(Paragraph::word_count).sum()
    }

    /// Total syllables across all tokens.
    pub fn syllable_count(&self) -> usize {
        self.tokens().map(|t| t.syllables).sum()
    }
}
