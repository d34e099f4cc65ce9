use serde::Serialize;
use vf_core::{PredictionResult, Verdict};

/// Flat view of a result for table output. Omits the article body.
#[derive(Debug, Serialize)]
pub struct ResultRow {
    pub id: String,
    pub prediction: Verdict,
    pub confidence: u8,
    pub band: &'static str,
    pub title: String,
    pub author: String,
    pub timestamp: String,
}

impl From<&PredictionResult> for ResultRow {
    fn from(result: &PredictionResult) -> Self {
        Self {
            id: result.id.clone(),
            prediction: result.prediction,
            confidence: result.confidence,
            band: result.band().as_str(),
            title: result.title.clone(),
            author: result.author.clone(),
            timestamp: result.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
