//! Client for the README generation service.
//!
//! Every call goes through [`ApiClient::send`], which applies the configured
//! deadline. On expiry the in-flight backend future is dropped, which cancels
//! the request, and `TimedOut` is returned.

mod generate;
mod github;

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{ErrorBody, HttpBackend, HttpMethod, ReqwestBackend};
use crate::url::{LOGIN_PATH, build_endpoint_url, parse_base_url};

/// Default client using the reqwest HTTP backend.
pub type DefaultApiClient = ApiClient<ReqwestBackend>;

/// Client for the README generation service.
///
/// Generic over the HTTP backend for testing. Use [`DefaultApiClient`] in
/// production code.
pub struct ApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
    pub(crate) timeout: Duration,
}

impl DefaultApiClient {
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self {
            backend,
            base_url,
            timeout: config.timeout,
        })
    }
}

impl<B: HttpBackend> ApiClient<B> {
    #[cfg(test)]
    pub(crate) fn with_backend(config: &ApiClientConfig, backend: B) -> Self {
        Self {
            backend,
            base_url: parse_base_url(&config.base_url).unwrap(),
            timeout: config.timeout,
        }
    }

    /// Where the user signs in to the service.
    pub fn login_url(&self) -> ApiResult<Url> {
        build_endpoint_url(&self.base_url, LOGIN_PATH)
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// One attempt, bounded by the deadline.
    pub(crate) async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        error_body: ErrorBody,
    ) -> ApiResult<Value> {
        let url = build_endpoint_url(&self.base_url, path)?;
        debug!(%method, %url, "Sending request");

        match tokio::time::timeout(self.timeout, self.backend.send(method, &url, body, error_body))
            .await
        {
            Ok(result) => result,
            Err(_) => {
                warn!(%method, %url, timeout_ms = self.timeout.as_millis(), "Request timed out");
                Err(ApiError::TimedOut {
                    timeout: self.timeout,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    fn client(backend: FakeBackend) -> ApiClient<FakeBackend> {
        ApiClient::with_backend(&ApiClientConfig::new(), backend)
    }

    #[test]
    fn test_default_client_creation() {
        let client = DefaultApiClient::new(&ApiClientConfig::new()).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(30));
        assert_eq!(client.login_url().unwrap().as_str(), "http://localhost:8000/login");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = ApiClientConfig::new().with_base_url("localhost:8000");
        assert!(DefaultApiClient::new(&config).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_expires_after_thirty_seconds() {
        let client = client(FakeBackend::new().with_response("/api/me", CannedResponse::Pending));

        let started = tokio::time::Instant::now();
        let result = client
            .send(HttpMethod::Get, "api/me", None, ErrorBody::Discard)
            .await;

        assert!(matches!(result, Err(ApiError::TimedOut { .. })));
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(30_000));
        assert!(elapsed < Duration::from_millis(30_100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_response_beats_deadline() {
        let client = client(
            FakeBackend::new().with_response("/api/me", CannedResponse::Json(json!({"ok": 1}))),
        );
        let value = client
            .send(HttpMethod::Get, "api/me", None, ErrorBody::Discard)
            .await
            .unwrap();
        assert_eq!(value["ok"], 1);
    }
}
