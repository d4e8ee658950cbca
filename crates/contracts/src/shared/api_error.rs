//! Errors produced by the REST resource clients

use serde::Deserialize;
use thiserror::Error;

/// Message used when the server gives no usable error body
pub const GENERIC_REQUEST_FAILURE: &str = "Request failed";

/// Failure of a single request/response round trip
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-success HTTP status; `message` is the server's `error` field
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request or the read of its response body failed in transport
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// An authorized call was attempted without a held credential
    #[error("Not authenticated")]
    NotAuthenticated,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Build the error for a non-success response from its raw body
    ///
    /// Uses the body's `error` field verbatim, falling back to
    /// [`GENERIC_REQUEST_FAILURE`] when the body is empty, not JSON, or has no
    /// `error` field.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_REQUEST_FAILURE.to_string());
        Self::Server { status, message }
    }

    /// True for 401/403 responses and missing credentials
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::Server { status, .. } => *status == 401 || *status == 403,
            Self::NotAuthenticated => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_surfaced_verbatim() {
        let err = ApiError::from_response(404, r#"{"error": "Product not found"}"#);
        assert_eq!(err.to_string(), "Product not found");
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn test_fallback_message_for_unusable_bodies() {
        for body in ["", "<html>502</html>", r#"{"message": "x"}"#, r#"{"error": ""}"#] {
            let err = ApiError::from_response(500, body);
            assert_eq!(err.to_string(), GENERIC_REQUEST_FAILURE, "body: {body}");
        }
    }

    #[test]
    fn test_auth_failures() {
        assert!(ApiError::from_response(401, "{}").is_auth_failure());
        assert!(ApiError::NotAuthenticated.is_auth_failure());
        assert!(!ApiError::Network("offline".into()).is_auth_failure());
    }
}
