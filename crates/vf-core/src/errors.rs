//! Cross-cutting error types for VeriFact.
//!
//! Domain-specific errors (`GatewayError`, `StoreError`, `ConfigError`) live
//! in their own crates. They converge into `anyhow` in `vf-cli`.

use thiserror::Error;

/// Errors that can be raised by any VeriFact crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value could not be parsed into the expected domain type.
    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: String, value: String },

    /// A history entry lookup returned no result.
    #[error("Result not found: {id}")]
    NotFound { id: String },
}
