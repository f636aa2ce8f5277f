//! Client error types.
//!
//! Every failure the Dokploy client can produce is classified here so callers
//! can branch on the kind of failure (and on the HTTP status for API errors)
//! instead of inspecting message text.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the Dokploy API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, DNS, TLS or timeout failure before a response was received
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Request body could not be encoded as JSON; nothing was sent
    #[error("Failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// API answered with a non-2xx status
    #[error("API error: {status} - {body}")]
    Api { status: StatusCode, body: String },

    /// A successful payload did not match the expected shape
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Client could not be constructed from the given settings
    #[error("Invalid client configuration for {field}: {message}")]
    InvalidConfig { field: String, message: String },
}

impl ClientError {
    /// Create an API error from a status code and response body
    pub fn api(status: StatusCode, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error for the given endpoint
    pub fn decode(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the API reported the target entity as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_starts_with_status_line() {
        let err = ClientError::api(StatusCode::BAD_REQUEST, r#"{"error":"bad"}"#);
        assert_eq!(
            err.to_string(),
            r#"API error: 400 Bad Request - {"error":"bad"}"#
        );
        assert!(err.to_string().starts_with("API error: 400 Bad Request"));
    }

    #[test]
    fn test_not_found_uses_status_code() {
        assert!(ClientError::api(StatusCode::NOT_FOUND, "").is_not_found());
        assert!(!ClientError::api(StatusCode::BAD_REQUEST, "project not found").is_not_found());
        assert!(!ClientError::api(StatusCode::INTERNAL_SERVER_ERROR, "404").is_not_found());
    }

    #[test]
    fn test_status_only_for_api_errors() {
        let err = ClientError::invalid_config("base_url", "must not be empty");
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());

        let err = ClientError::api(StatusCode::UNAUTHORIZED, "nope");
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_decode_error_names_endpoint() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ClientError::decode("certificates.one", source);
        assert!(err.to_string().starts_with("Failed to decode certificates.one response"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = ClientError::invalid_config("api_key", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid client configuration for api_key: must not be empty"
        );
    }
}
