//! HTTP backend abstraction for the README service.
//!
//! The client talks to a trait object so tests can swap in canned responses.
//! The production implementation uses reqwest and makes exactly one attempt
//! per call; the deadline is applied by the client, not here.

use std::fmt;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE, HeaderMap, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::config::ApiClientConfig;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// What to do with the body of a non-2xx response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorBody {
    /// Report the status only.
    #[default]
    Discard,
    /// Attach the body to the error when it is valid JSON.
    Read,
}

/// Trait for HTTP backends that exchange JSON with the service.
///
/// This is an implementation detail - external code should use the
/// `ReadmeBackendPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn send(
        &self,
        method: HttpMethod,
        url: &Url,
        body: Option<&Value>,
        error_body: ErrorBody,
    ) -> ApiResult<Value>;
}

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(cookie) = &config.session {
            let mut value = HeaderValue::from_str(cookie).map_err(|e| ApiError::Configuration {
                message: format!("invalid session cookie: {e}"),
            })?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Configuration {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(
        &self,
        method: HttpMethod,
        url: &Url,
        body: Option<&Value>,
        error_body: ErrorBody,
    ) -> ApiResult<Value> {
        let mut request = match method {
            HttpMethod::Get => self.client.get(url.clone()),
            HttpMethod::Post => self.client.post(url.clone()),
        };
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = match error_body {
                ErrorBody::Read => response.json::<Value>().await.ok(),
                ErrorBody::Discard => None,
            };
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reqwest_backend_creation() {
        assert!(ReqwestBackend::new(&ApiClientConfig::new()).is_ok());
        assert!(ReqwestBackend::new(&ApiClientConfig::new().with_session("session=abc")).is_ok());
    }

    #[test]
    fn test_reqwest_backend_rejects_unprintable_cookie() {
        let config = ApiClientConfig::new().with_session("session=\nabc");
        assert!(matches!(
            ReqwestBackend::new(&config),
            Err(ApiError::Configuration { .. })
        ));
    }

    #[tokio::test]
    async fn test_fake_backend_returns_canned_response() {
        let backend = FakeBackend::new().with_response("/api/me", CannedResponse::Json(json!({"authenticated": true})));
        let url = Url::parse("http://localhost:8000/api/me").unwrap();

        let value = backend.send(HttpMethod::Get, &url, None, ErrorBody::Discard).await.unwrap();
        assert_eq!(value["authenticated"], true);
        assert_eq!(backend.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_fake_backend_only_keeps_error_body_on_opt_in() {
        let backend = FakeBackend::new().with_response(
            "/api/publish",
            CannedResponse::Status {
                status: 500,
                body: Some(json!({"success": false})),
            },
        );
        let url = Url::parse("http://localhost:8000/api/publish").unwrap();

        let discarded = backend.send(HttpMethod::Post, &url, None, ErrorBody::Discard).await;
        assert!(matches!(discarded, Err(ApiError::HttpStatus { status: 500, body: None, .. })));

        let read = backend.send(HttpMethod::Post, &url, None, ErrorBody::Read).await;
        assert!(matches!(read, Err(ApiError::HttpStatus { body: Some(_), .. })));
    }
}
