//! Abbreviation dictionary for sentence boundary detection.
//!
//! A period after any of these words is not a sentence break. Callers can
//! supply additional abbreviations per analysis through
//! [`AnalysisOptions`](crate::AnalysisOptions).

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations whose trailing period does not end a sentence.
///
/// Entries are lowercase with no trailing period; multi-part abbreviations
/// keep their internal periods (`e.g`, `i.e`, `u.s`).
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "hon", "capt", "col", "gen", "lt",
        "maj", "sgt", "sen", "rep", "gov", "pres",
    ]);

    // Latin and scholarly ("al" covers the trailing token of "et al.")
    set.extend([
        "etc", "vs", "e.g", "i.e", "cf", "al", "viz", "n.b", "p.s", "ca", "approx",
    ]);

    // Calendar
    set.extend([
        "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
        "mon", "tue", "wed", "thu", "fri", "sat", "sun", "a.m", "p.m",
    ]);

    // Places and organizations
    set.extend([
        "st", "ave", "blvd", "rd", "apt", "dept", "u.s", "u.k", "u.s.a", "inc", "corp", "ltd",
        "co", "vol",
    ]);

    // Units
    set.extend([
        "oz", "lb", "lbs", "kg", "mg", "ml", "cm", "mm", "km", "ft", "mi", "hr",
    ]);

    set
});

/// Check whether a word is a known abbreviation.
///
/// Case-insensitive; leading and trailing periods are ignored so `"Dr."`,
/// `"dr"`, and `"e.g."` all match.
pub fn is_abbreviation(word: &str) -> bool {
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(lower.trim_matches('.'))
}
