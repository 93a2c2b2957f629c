use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Canonical emotion labels recognized by the aggregator and the
/// recommendation service. Everything else must be folded into one of these
/// via [`Emotion::from_label`] or it is ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Love,
    Surprise,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Love => "love",
            Emotion::Surprise => "surprise",
        }
    }

    /// Folds a free-form dataset label into the canonical set.
    ///
    /// Matching is case-insensitive and goes through a synonym table for the
    /// alternate labels the color dataset and review corpus are known to use
    /// (e.g. "リラックス" and "happy" both mean joy here).
    pub fn from_label(label: &str) -> Option<Emotion> {
        let normalized = label.trim().to_lowercase();
        let canonical = match normalized.as_str() {
            "joy" => Emotion::Joy,
            "sadness" => Emotion::Sadness,
            "anger" => Emotion::Anger,
            "fear" => Emotion::Fear,
            "love" => Emotion::Love,
            "surprise" => Emotion::Surprise,
            // dataset label for relaxed moods
            "リラックス" => Emotion::Joy,
            "happy" | "happiness" | "delight" | "fun" => Emotion::Joy,
            "romance" | "romantic" => Emotion::Love,
            "scary" | "afraid" => Emotion::Fear,
            "angry" | "mad" => Emotion::Anger,
            "shock" | "shocking" => Emotion::Surprise,
            "depressing" | "blue" => Emotion::Sadness,
            _ => return None,
        };
        Some(canonical)
    }
}

impl Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_canonical() {
        assert_eq!(Emotion::from_label("joy"), Some(Emotion::Joy));
        assert_eq!(Emotion::from_label("love"), Some(Emotion::Love));
        assert_eq!(Emotion::from_label("surprise"), Some(Emotion::Surprise));
    }

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(Emotion::from_label("JOY"), Some(Emotion::Joy));
        assert_eq!(Emotion::from_label(" Fear "), Some(Emotion::Fear));
    }

    #[test]
    fn test_from_label_synonyms() {
        assert_eq!(Emotion::from_label("リラックス"), Some(Emotion::Joy));
        assert_eq!(Emotion::from_label("romantic"), Some(Emotion::Love));
        assert_eq!(Emotion::from_label("scary"), Some(Emotion::Fear));
        assert_eq!(Emotion::from_label("blue"), Some(Emotion::Sadness));
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(Emotion::from_label("disgust"), None);
        assert_eq!(Emotion::from_label(""), None);
    }

    #[test]
    fn test_serialization_lowercase() {
        let json = serde_json::to_string(&Emotion::Sadness).unwrap();
        assert_eq!(json, "\"sadness\"");

        let parsed: Emotion = serde_json::from_str("\"anger\"").unwrap();
        assert_eq!(parsed, Emotion::Anger);
    }
}
