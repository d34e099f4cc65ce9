use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::article::ArticleInput;
use crate::enums::{ConfidenceBand, Verdict};

/// Confidence reported when the classifier does not supply one.
///
/// The legacy gateway only returns a verdict token, so every result carries
/// this value. It is a placeholder, not a measured score.
pub const FIXED_CONFIDENCE: u8 = 85;

/// Maximum number of results kept in the history.
pub const HISTORY_LIMIT: usize = 10;

/// Outcome of one successful classification. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PredictionResult {
    pub id: String,
    pub title: String,
    pub author: String,
    pub text: String,
    pub prediction: Verdict,
    /// Percentage in `0..=100`.
    pub confidence: u8,
    pub timestamp: DateTime<Utc>,
}

impl PredictionResult {
    #[must_use]
    pub fn new(
        id: String,
        input: ArticleInput,
        prediction: Verdict,
        confidence: u8,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            text: input.text,
            prediction,
            confidence: confidence.min(100),
            timestamp,
        }
    }

    #[must_use]
    pub const fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }

    /// One-line summary suitable for pasting elsewhere.
    #[must_use]
    pub fn share_text(&self) -> String {
        format!(
            "VeriFact Analysis: \"{}\" - {} ({}% confidence)",
            self.title, self.prediction, self.confidence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn result(confidence: u8) -> PredictionResult {
        PredictionResult::new(
            "1700000000000".into(),
            ArticleInput::new("Moon Landing Faked", "Anon", "x".repeat(60)),
            Verdict::Fake,
            confidence,
            Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        )
    }

    #[test]
    fn share_text_format() {
        assert_eq!(
            result(85).share_text(),
            "VeriFact Analysis: \"Moon Landing Faked\" - FAKE (85% confidence)"
        );
    }

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(result(250).confidence, 100);
    }

    #[test]
    fn band_follows_confidence() {
        assert_eq!(result(FIXED_CONFIDENCE).band(), ConfidenceBand::High);
        assert_eq!(result(40).band(), ConfidenceBand::Low);
    }

    #[test]
    fn serialized_field_names_match_snapshot_format() {
        let json = serde_json::to_value(result(85)).unwrap();
        assert_eq!(json["prediction"], "FAKE");
        assert_eq!(json["confidence"], 85);
        assert_eq!(json["timestamp"], "2023-11-14T22:13:20Z");
    }
}
