use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::MoodCategory;

/// Labels detectors are known to emit, keyed in lowercase
const MOOD_SYNONYMS: &[(&str, MoodCategory)] = &[
    ("happy", MoodCategory::Happy),
    ("happiness", MoodCategory::Happy),
    ("joy", MoodCategory::Happy),
    ("sad", MoodCategory::Sad),
    ("sadness", MoodCategory::Sad),
    ("angry", MoodCategory::Angry),
    ("anger", MoodCategory::Angry),
    ("neutral", MoodCategory::Neutral),
    ("surprise", MoodCategory::Surprise),
    ("surprised", MoodCategory::Surprise),
    ("fear", MoodCategory::Fear),
    ("scared", MoodCategory::Fear),
    ("disgust", MoodCategory::Disgust),
    ("disgusted", MoodCategory::Disgust),
];

static SYNONYM_TABLE: Lazy<HashMap<&'static str, MoodCategory>> =
    Lazy::new(|| MOOD_SYNONYMS.iter().copied().collect());

/// Maps a raw mood label to its canonical category
///
/// Matching is case-insensitive but otherwise exact. Anything not in the
/// synonym table, including the empty string, falls back to `Neutral`.
pub fn normalize(raw_label: &str) -> MoodCategory {
    let lowered = raw_label.to_lowercase();
    SYNONYM_TABLE
        .get(lowered.as_str())
        .copied()
        .unwrap_or(MoodCategory::Neutral)
}
