//! Emotion classification types.
//!
//! The five tracked emotion categories and the score record the upstream
//! classifier produces for a text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five tracked emotion categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// All categories in canonical order.
    ///
    /// This order also decides ties when computing the dominant emotion:
    /// the first maximal score wins.
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    /// Lowercase label as used in API payloads and formatted output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-emotion probability scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    /// Score for a single category.
    pub fn score(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// The highest-scoring category.
    ///
    /// Ties resolve to the first maximal entry in [`Emotion::ALL`] order.
    pub fn dominant(&self) -> Emotion {
        let mut best = Emotion::ALL[0];
        for &candidate in &Emotion::ALL[1..] {
            if self.score(candidate) > self.score(best) {
                best = candidate;
            }
        }
        best
    }
}

/// Result of classifying one text: raw scores plus the dominant category.
///
/// Created fresh per request; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmotionReport {
    pub scores: EmotionScores,
    /// The determined emotion label (highest score).
    pub dominant: Emotion,
}

impl EmotionReport {
    /// Build a report from raw scores, computing the dominant emotion.
    pub fn from_scores(scores: EmotionScores) -> Self {
        Self {
            dominant: scores.dominant(),
            scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> EmotionScores {
        EmotionScores {
            anger,
            disgust,
            fear,
            joy,
            sadness,
        }
    }

    #[test]
    fn dominant_picks_highest_score() {
        let report = EmotionReport::from_scores(scores(0.1, 0.05, 0.2, 0.9, 0.15));
        assert_eq!(report.dominant, Emotion::Joy);
    }

    #[test]
    fn dominant_tie_resolves_to_canonical_order() {
        // anger and sadness tie; anger comes first in Emotion::ALL
        let s = scores(0.4, 0.1, 0.1, 0.1, 0.4);
        assert_eq!(s.dominant(), Emotion::Anger);
    }

    #[test]
    fn dominant_all_equal_picks_anger() {
        let s = scores(0.2, 0.2, 0.2, 0.2, 0.2);
        assert_eq!(s.dominant(), Emotion::Anger);
    }

    #[test]
    fn score_accessor_matches_fields() {
        let s = scores(0.1, 0.2, 0.3, 0.4, 0.5);
        assert_eq!(s.score(Emotion::Anger), 0.1);
        assert_eq!(s.score(Emotion::Sadness), 0.5);
    }

    #[test]
    fn display_uses_lowercase_labels() {
        assert_eq!(Emotion::Joy.to_string(), "joy");
        assert_eq!(Emotion::Disgust.to_string(), "disgust");
    }

    #[test]
    fn scores_deserialize_from_classifier_payload() {
        let json = r#"{"anger": 0.01, "disgust": 0.02, "fear": 0.03, "joy": 0.9, "sadness": 0.04}"#;
        let s: EmotionScores = serde_json::from_str(json).unwrap();
        assert!((s.joy - 0.9).abs() < f64::EPSILON);
        assert_eq!(s.dominant(), Emotion::Joy);
    }
}
