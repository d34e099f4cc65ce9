//! # vf-core
//!
//! Core types, validation rules, and error types for VeriFact.
//!
//! This crate provides the foundational types shared across all VeriFact crates:
//! - Article input and the canned sample article
//! - Local input validation with per-field error mapping
//! - Prediction results, verdicts, and confidence bands
//! - Result ID generation
//! - User-visible notices
//! - CLI response types
//! - Static educational resources

pub mod article;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod notice;
pub mod prediction;
pub mod resources;
pub mod responses;
pub mod validation;

pub use article::{ArticleInput, sample_article};
pub use enums::{ConfidenceBand, FailureKind, Theme, Verdict};
pub use errors::CoreError;
pub use notice::{Notice, NoticeLevel};
pub use prediction::{FIXED_CONFIDENCE, HISTORY_LIMIT, PredictionResult};
pub use validation::{Field, FieldError, ValidationErrors, ValidationKind, validate};
