//! Core error types for poc-api-core.
//!
//! Uses `thiserror` for structured, matchable error variants. The HTTP layer
//! maps each variant to a status code.

use thiserror::Error;

/// Errors produced while turning request inputs into responses.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required query parameter was absent from the request.
    #[error("required query parameter '{name}' is not present")]
    MissingParameter { name: &'static str },
}

/// Unwraps a required query parameter.
///
/// Only absence is an error. A parameter present with an empty value is
/// passed through as the empty string.
pub fn require(value: Option<String>, name: &'static str) -> Result<String, CoreError> {
    value.ok_or(CoreError::MissingParameter { name })
}
