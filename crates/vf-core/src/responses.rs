//! CLI response types returned as JSON by `verifact` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ConfidenceBand, Theme};
use crate::prediction::PredictionResult;
use crate::resources::{FACT_CHECKING_SITES, FACT_CHECKING_TIPS, FactCheckSite};
use crate::validation::{Field, MIN_TEXT_CHARS, ValidationErrors};

/// Response from a successful `verifact check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckResponse {
    pub result: PredictionResult,
    pub band: ConfidenceBand,
    pub band_label: String,
}

impl From<PredictionResult> for CheckResponse {
    fn from(result: PredictionResult) -> Self {
        let band = result.band();
        Self {
            result,
            band,
            band_label: band.label().to_string(),
        }
    }
}

/// Response from `verifact check` when the input fails validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationFailedResponse {
    pub errors: ValidationErrors,
    pub text_length: usize,
    /// Character count hint, present only when the body failed its rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_hint: Option<String>,
}

impl ValidationFailedResponse {
    #[must_use]
    pub fn new(errors: ValidationErrors, text_length: usize) -> Self {
        let text_hint = errors
            .contains(Field::Text)
            .then(|| format!("{text_length} characters (minimum {MIN_TEXT_CHARS} required)"));
        Self {
            errors,
            text_length,
            text_hint,
        }
    }
}

/// Response from `verifact history clear`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryClearResponse {
    pub cleared: usize,
}

/// Response from `verifact history share`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ShareResponse {
    pub id: String,
    pub text: String,
}

/// Response from `verifact theme`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// Response from `verifact resources`.
#[derive(Debug, Clone, Serialize)]
pub struct ResourcesResponse {
    pub tips: &'static [&'static str],
    pub sites: &'static [FactCheckSite],
}

impl Default for ResourcesResponse {
    fn default() -> Self {
        Self {
            tips: FACT_CHECKING_TIPS,
            sites: FACT_CHECKING_SITES,
        }
    }
}
