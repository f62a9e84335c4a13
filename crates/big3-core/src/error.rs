//! Validation errors for locally-built request values

use thiserror::Error;

/// Errors raised before any request leaves the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string field was empty or whitespace-only
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// Provider identifier is not one of the supported vendors
    #[error("Unknown provider '{value}'. Valid values: openai, anthropic, google")]
    UnknownProvider { value: String },

    /// Base URL could not be used to address the API
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Team identifier was empty
    #[error("team_id must not be empty")]
    EmptyTeamId,

    /// A configured timeout was zero, which would fail every request
    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },
}

/// Reject empty or whitespace-only values for a required field.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}
