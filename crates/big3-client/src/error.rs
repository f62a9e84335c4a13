//! Error taxonomy for API calls

use big3_core::ValidationError;
use thiserror::Error;

/// Errors returned by [`crate::Big3Client`] and the free functions.
///
/// Every call either returns an id or exactly one of these. Nothing is
/// retried or recovered locally.
#[derive(Error, Debug)]
pub enum Big3Error {
    /// Input failed local checks; no request was sent
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Connection, DNS, TLS or timeout failure before a full response arrived
    #[error("Transport error calling {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// Server reported the parent resource (the team) does not exist
    #[error("Not found (HTTP {status}): {body}")]
    NotFound { status: u16, body: String },

    /// Success status, but the body is not the expected response shape
    #[error("Failed to decode response: {reason}")]
    Decode { body: String, reason: String },

    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl Big3Error {
    /// HTTP status carried by `Api` and `NotFound`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Big3Error::Api { status, .. } | Big3Error::NotFound { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body carried by `Api` and `NotFound`.
    pub fn body(&self) -> Option<&str> {
        match self {
            Big3Error::Api { body, .. } | Big3Error::NotFound { body, .. } => Some(body),
            _ => None,
        }
    }

    /// True for any server-reported failure, including `NotFound`.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Big3Error::Api { .. } | Big3Error::NotFound { .. })
    }

    /// True when the server reported a missing team.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Big3Error::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_an_api_error() {
        let err = Big3Error::NotFound {
            status: 404,
            body: r#"{"error":"team not found"}"#.to_string(),
        };
        assert!(err.is_api_error());
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some(r#"{"error":"team not found"}"#));
    }

    #[test]
    fn api_error_carries_status_and_body() {
        let err = Big3Error::Api {
            status: 409,
            body: "team name taken".to_string(),
        };
        assert!(err.is_api_error());
        assert!(!err.is_not_found());
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "API error (HTTP 409): team name taken");
    }

    #[test]
    fn validation_error_converts() {
        let err: Big3Error = ValidationError::EmptyTeamId.into();
        assert!(matches!(err, Big3Error::Validation(ValidationError::EmptyTeamId)));
        assert!(!err.is_api_error());
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
    }

    #[test]
    fn decode_error_message() {
        let err = Big3Error::Decode {
            body: "{}".to_string(),
            reason: "missing field `id`".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to decode response: missing field `id`");
        assert!(!err.is_api_error());
    }
}
