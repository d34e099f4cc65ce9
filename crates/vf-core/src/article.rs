use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An article submitted for classification.
///
/// Fields are kept exactly as entered; validation (see [`crate::validate`])
/// inspects them without trimming or rewriting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArticleInput {
    pub title: String,
    pub author: String,
    pub text: String,
}

impl ArticleInput {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            text: text.into(),
        }
    }

    /// Length of the title in UTF-16 code units, the unit the form counts in.
    #[must_use]
    pub fn title_length(&self) -> usize {
        self.title.encode_utf16().count()
    }

    /// Length of the article body in UTF-16 code units.
    #[must_use]
    pub fn text_length(&self) -> usize {
        self.text.encode_utf16().count()
    }
}

const SAMPLE_TITLE: &str = "Scientists Discover New Treatment for Common Cold";
const SAMPLE_AUTHOR: &str = "Dr. Sarah Johnson";
const SAMPLE_TEXT: &str = "Researchers at the University of Medicine have announced a breakthrough in \
treating the common cold. The new treatment, based on advanced immunotherapy techniques, has shown \
promising results in clinical trials with a 85% success rate. The treatment works by boosting the \
immune system's natural ability to fight off cold viruses. Dr. Johnson, lead researcher on the \
project, stated that this could revolutionize how we approach common viral infections. The treatment \
is expected to be available to the public within the next two years, pending regulatory approval \
from health authorities.";

/// Canned demo article used by `verifact check --sample`.
#[must_use]
pub fn sample_article() -> ArticleInput {
    ArticleInput::new(SAMPLE_TITLE, SAMPLE_AUTHOR, SAMPLE_TEXT)
}
