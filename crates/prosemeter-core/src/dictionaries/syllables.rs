//! Heuristic syllable counting with an exception table.
//!
//! The estimator counts vowel-group starts and applies silent-`e` and `-le`
//! corrections. It is approximate by design: dictionary mismatches on
//! irregular words are expected, and the small exception table below covers
//! only the common words the heuristic is known to mis-score.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Words the vowel-group heuristic mis-scores, with their true counts.
///
/// A match here wins outright; no correction rules are applied.
pub static SYLLABLE_EXCEPTIONS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    [
        ("simile", 3),
        ("recipe", 3),
        ("people", 2),
        ("chocolate", 3),
        ("every", 2),
        ("being", 2),
        ("area", 3),
        ("idea", 3),
        ("real", 2),
        ("quiet", 2),
        ("science", 2),
        ("poem", 2),
    ]
    .into_iter()
    .collect()
});

/// Count syllables in a single word.
///
/// The word may carry any casing or attached punctuation; everything outside
/// `[a-z]` is stripped first. An empty result counts 0, words of one or two
/// letters count 1, and every longer word counts at least 1.
pub fn count_syllables(word: &str) -> usize {
    let stripped: String = word
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();

    if stripped.is_empty() {
        return 0;
    }
    if stripped.len() <= 2 {
        return 1;
    }
    if let Some(&count) = SYLLABLE_EXCEPTIONS.get(stripped.as_str()) {
        return count;
    }

    estimate(stripped.as_bytes()).max(1)
}

/// Vowel-group estimation over a stripped `[a-z]+` word.
fn estimate(bytes: &[u8]) -> usize {
    let mut count: usize = 0;
    let mut previous_was_vowel = false;

    for &b in bytes {
        let vowel = is_vowel(b);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    // Silent e: consonant + terminal `e` ("home", "make")
    if bytes.len() >= 2 && bytes[bytes.len() - 1] == b'e' && !is_vowel(bytes[bytes.len() - 2]) {
        count = count.saturating_sub(1);
    }

    // Consonant + terminal `le` restores a syllable ("simple", "table")
    if bytes.len() >= 3 && bytes.ends_with(b"le") && !is_vowel(bytes[bytes.len() - 3]) {
        count += 1;
    }

    count
}

const fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}
