//! Local, synchronous validation of [`ArticleInput`].
//!
//! Each field yields at most one error. `Required` is checked first, so a
//! blank title reports `Required` rather than `TooShort`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::article::ArticleInput;

/// Minimum title length, in UTF-16 code units.
pub const MIN_TITLE_CHARS: usize = 5;

/// Minimum article body length, in UTF-16 code units.
pub const MIN_TEXT_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Author,
    Text,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    Required,
    TooShort,
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: ValidationKind,
    pub message: String,
}

impl FieldError {
    fn new(kind: ValidationKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

/// Field → error mapping. Empty when the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check every field of `input` against its rule.
#[must_use]
pub fn validate(input: &ArticleInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&input.title) {
        errors.insert(
            Field::Title,
            FieldError::new(ValidationKind::Required, "Article title is required"),
        );
    } else if input.title_length() < MIN_TITLE_CHARS {
        errors.insert(
            Field::Title,
            FieldError::new(
                ValidationKind::TooShort,
                "Title must be at least 5 characters long",
            ),
        );
    }

    if is_blank(&input.author) {
        errors.insert(
            Field::Author,
            FieldError::new(ValidationKind::Required, "Author name is required"),
        );
    }

    if is_blank(&input.text) {
        errors.insert(
            Field::Text,
            FieldError::new(ValidationKind::Required, "Article text is required"),
        );
    } else if input.text_length() < MIN_TEXT_CHARS {
        errors.insert(
            Field::Text,
            FieldError::new(
                ValidationKind::TooShort,
                "Article text must be at least 50 characters long",
            ),
        );
    }

    errors
}
