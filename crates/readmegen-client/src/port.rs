//! Port trait implementation for `ApiClient`.
//!
//! Implements the core-owned `ReadmeBackendPort`, translating internal
//! errors into the uniform `TransportError`.

use std::error::Error as _;

use async_trait::async_trait;
use readmegen_core::ports::{ReadmeBackendPort, TransportError, TransportResult};
use readmegen_core::{GenerationRequest, PublishReply, PublishRequest, RepositorySummary};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `TransportError`.
pub(crate) fn map_error(err: ApiError) -> TransportError {
    match err {
        ApiError::HttpStatus { status, .. } => TransportError::Http { status },
        ApiError::TimedOut { .. } => TransportError::TimedOut,
        ApiError::Network(e) if e.is_timeout() => TransportError::TimedOut,
        ApiError::Network(e) if e.is_decode() => TransportError::Parse(e.to_string()),
        ApiError::Network(e) => TransportError::Network(describe(&e)),
        ApiError::InvalidResponse { message } => TransportError::Parse(message),
        ApiError::JsonParse(e) => TransportError::Parse(e.to_string()),
        ApiError::InvalidUrl(e) => TransportError::Network(format!("invalid URL: {e}")),
        ApiError::Configuration { message } => TransportError::Network(message),
    }
}

/// The error with its causes, e.g. `error sending request: connection refused`.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> ReadmeBackendPort for ApiClient<B> {
    async fn generate_readme(&self, request: &GenerationRequest) -> TransportResult<String> {
        self.request_readme(request).await.map_err(map_error)
    }

    async fn check_identity(&self) -> TransportResult<bool> {
        self.request_identity().await.map_err(map_error)
    }

    async fn list_repositories(&self) -> TransportResult<Vec<RepositorySummary>> {
        self.request_repositories().await.map_err(map_error)
    }

    async fn publish(&self, request: &PublishRequest) -> TransportResult<PublishReply> {
        self.request_publish(request).await.map_err(map_error)
    }
}
