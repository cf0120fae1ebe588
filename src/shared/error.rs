//! Shared Error Types
//!
//! Errors that describe bad input independently of the HTTP layer. The backend
//! wraps them in `BackendError` and maps them to `400 Bad Request`.
//!
//! # Usage
//!
//! ```rust
//! use some_comments::shared::error::SharedError;
//!
//! let error = SharedError::validation("domain", "Domain cannot be empty");
//! ```
use thiserror::Error;

/// Input errors shared by every layer of the crate
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Reject blank text input, returning the trimmed value otherwise
pub fn require_non_blank<'a>(field: &str, value: &'a str) -> Result<&'a str, SharedError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SharedError::validation(field, format!("{} cannot be empty", field)));
    }
    Ok(trimmed)
}
