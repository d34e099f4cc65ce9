use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Verdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Warning,
    Destructive,
}

/// A transient, user-visible status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    fn new(level: NoticeLevel, title: &str, description: String) -> Self {
        Self {
            level,
            title: title.to_string(),
            description,
        }
    }

    #[must_use]
    pub fn analysis_complete(verdict: Verdict) -> Self {
        Self::new(
            NoticeLevel::Info,
            "Analysis Complete",
            format!("News article analyzed as {verdict}."),
        )
    }

    #[must_use]
    pub fn analysis_failed() -> Self {
        Self::new(
            NoticeLevel::Destructive,
            "Analysis Failed",
            "Unable to analyze the article. Please try again.".to_string(),
        )
    }

    #[must_use]
    pub fn history_not_saved() -> Self {
        Self::new(
            NoticeLevel::Warning,
            "History Not Saved",
            "The result could not be written to local history.".to_string(),
        )
    }

    #[must_use]
    pub fn history_cleared() -> Self {
        Self::new(
            NoticeLevel::Info,
            "History Cleared",
            "All previous analyses have been removed.".to_string(),
        )
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.level, NoticeLevel::Destructive)
    }
}
