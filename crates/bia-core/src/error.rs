//! Centralized error types for BIA.

use thiserror::Error;

/// Main error type for BIA operations.
#[derive(Error, Debug)]
pub enum BiaError {
    #[error("Business query is empty")]
    EmptyQuery,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Result type for BIA operations.
pub type BiaResult<T> = Result<T, BiaError>;

impl BiaError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
