//! Reading time estimation across configurable speed presets.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Canonical speed presets in words per minute.
///
/// These are configuration, not contract: callers can replace them through
/// [`AnalysisOptions`](crate::AnalysisOptions) or the config file.
pub fn default_reading_speeds() -> Vec<(String, usize)> {
    vec![
        ("slow".to_string(), 150),
        ("average".to_string(), 250),
        ("fast".to_string(), 300),
        ("expert".to_string(), 400),
    ]
}

/// Estimated reading time at one speed preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadingTimeEstimate {
    /// Minutes at this speed, rounded to 2 decimals.
    pub minutes: f64,
    /// Human form: `"< 1 min"`, `"X min"`, or `"Xh Ym"`.
    pub formatted: String,
}

/// Estimate reading time for a word count across the given presets.
///
/// Fails if any preset carries a rate of zero words per minute.
pub fn estimate(
    word_count: usize,
    speeds: &[(String, usize)],
) -> AnalysisResult<BTreeMap<String, ReadingTimeEstimate>> {
    let mut estimates = BTreeMap::new();

    for (preset, wpm) in speeds {
        if *wpm == 0 {
            return Err(AnalysisError::InvalidReadingSpeed {
                preset: preset.clone(),
            });
        }
        let raw = word_count as f64 / *wpm as f64;
        estimates.insert(
            preset.clone(),
            ReadingTimeEstimate {
                minutes: round2(raw),
                formatted: format_minutes(raw),
            },
        );
    }

    Ok(estimates)
}

/// Format raw minutes with ceiling-minute rounding.
pub fn format_minutes(minutes: f64) -> String {
    if minutes < 1.0 {
        return "< 1 min".to_string();
    }

    let whole = minutes.ceil() as u64;
    if whole < 60 {
        format!("{whole} min")
    } else {
        format!("{}h {}m", whole / 60, whole % 60)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
