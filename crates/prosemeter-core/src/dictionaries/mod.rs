//! Dictionaries for text analysis.
//!
//! Provides curated word sets used by sentence boundary detection and
//! syllable counting.

pub mod abbreviations;
pub mod syllables;
