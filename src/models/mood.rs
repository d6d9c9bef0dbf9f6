use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Canonical mood categories that recommendations are keyed by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Happy,
    Sad,
    Angry,
    /// Fallback for anything unrecognized
    #[default]
    Neutral,
    Surprise,
    Fear,
    Disgust,
}

impl MoodCategory {
    /// Every category, in declaration order
    pub const ALL: [MoodCategory; 7] = [
        MoodCategory::Happy,
        MoodCategory::Sad,
        MoodCategory::Angry,
        MoodCategory::Neutral,
        MoodCategory::Surprise,
        MoodCategory::Fear,
        MoodCategory::Disgust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodCategory::Happy => "happy",
            MoodCategory::Sad => "sad",
            MoodCategory::Angry => "angry",
            MoodCategory::Neutral => "neutral",
            MoodCategory::Surprise => "surprise",
            MoodCategory::Fear => "fear",
            MoodCategory::Disgust => "disgust",
        }
    }
}

impl Display for MoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_name() {
        for category in MoodCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(MoodCategory::default(), MoodCategory::Neutral);
    }

    #[test]
    fn test_deserialize_lowercase_name() {
        let category: MoodCategory = serde_json::from_str("\"surprise\"").unwrap();
        assert_eq!(category, MoodCategory::Surprise);
    }
}
