//! Internal error types for service calls.
//!
//! These errors are internal to `readmegen-client` and are mapped to the core
//! `TransportError` at the port boundary.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for service calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    ///
    /// `body` is only read when the caller opted in.
    #[error("request to {url} failed with status {status}")]
    HttpStatus {
        status: u16,
        url: String,
        body: Option<serde_json::Value>,
    },

    /// The deadline expired before the exchange completed.
    #[error("request timed out after {timeout:?}")]
    TimedOut { timeout: Duration },

    /// The body parsed as JSON but not into the shape the endpoint promises.
    #[error("Invalid response from service: {message}")]
    InvalidResponse { message: String },

    /// The HTTP client could not be constructed.
    #[error("Invalid client configuration: {message}")]
    Configuration { message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ApiError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_error_message() {
        let error = ApiError::HttpStatus {
            status: 502,
            url: "http://localhost:8000/api/repos".to_string(),
            body: None,
        };
        let msg = error.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("/api/repos"));
    }

    #[test]
    fn test_invalid_response_error_message() {
        let error = ApiError::invalid("missing field 'readme'");
        assert!(error.to_string().contains("missing field 'readme'"));
    }
}
