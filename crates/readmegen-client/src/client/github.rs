//! GitHub-backed endpoints: identity, repository list and publish.

use readmegen_core::{PublishReply, PublishRequest, RepositorySummary};

use super::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::http::{ErrorBody, HttpBackend, HttpMethod};
use crate::parsing::{parse_identity, parse_publish_reply, parse_repositories, publish_body};
use crate::url::{IDENTITY_PATH, PUBLISH_PATH, REPOSITORIES_PATH};

impl<B: HttpBackend> ApiClient<B> {
    pub(crate) async fn request_identity(&self) -> ApiResult<bool> {
        let json = self
            .send(HttpMethod::Get, IDENTITY_PATH, None, ErrorBody::Discard)
            .await?;
        parse_identity(json)
    }

    pub(crate) async fn request_repositories(&self) -> ApiResult<Vec<RepositorySummary>> {
        let json = self
            .send(HttpMethod::Get, REPOSITORIES_PATH, None, ErrorBody::Discard)
            .await?;
        parse_repositories(json)
    }

    /// Publish README content.
    ///
    /// Non-2xx answers other than 401 are read: a parseable body becomes an
    /// unsuccessful reply, whatever its `success` flag says.
    pub(crate) async fn request_publish(&self, request: &PublishRequest) -> ApiResult<PublishReply> {
        let body = publish_body(request)?;
        match self
            .send(HttpMethod::Post, PUBLISH_PATH, Some(&body), ErrorBody::Read)
            .await
        {
            Ok(json) => parse_publish_reply(json),
            Err(ApiError::HttpStatus {
                status,
                url,
                body: Some(json),
            }) if status != 401 => match parse_publish_reply(json) {
                Ok(reply) => Ok(PublishReply {
                    success: false,
                    ..reply
                }),
                Err(_) => Err(ApiError::HttpStatus {
                    status,
                    url,
                    body: None,
                }),
            },
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiClientConfig;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    fn client(path: &str, response: CannedResponse) -> ApiClient<FakeBackend> {
        ApiClient::with_backend(
            &ApiClientConfig::new(),
            FakeBackend::new().with_response(path, response),
        )
    }

    #[tokio::test]
    async fn test_identity() {
        let client = client("/api/me", CannedResponse::Json(json!({"authenticated": true})));
        assert!(client.request_identity().await.unwrap());
    }

    #[tokio::test]
    async fn test_repositories_keep_server_order() {
        let client = client(
            "/api/repos",
            CannedResponse::Json(json!({"repos": [
                {"full_name": "zed/a", "private": false},
                {"full_name": "octo/b", "private": true},
            ]})),
        );
        let names: Vec<_> = client
            .request_repositories()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.full_name)
            .collect();
        assert_eq!(names, vec!["zed/a", "octo/b"]);
    }

    #[tokio::test]
    async fn test_publish_success() {
        let client = client("/api/publish", CannedResponse::Json(json!({"success": true})));
        let request = PublishRequest::new("octo/hello", "# hi", "main");
        assert!(client.request_publish(&request).await.unwrap().success);

        let sent = client.backend.recorded();
        assert_eq!(sent[0].body.as_ref().unwrap()["full_name"], "octo/hello");
    }

    #[tokio::test]
    async fn test_publish_error_body_becomes_failed_reply() {
        let client = client(
            "/api/publish",
            CannedResponse::Status {
                status: 500,
                body: Some(json!({
                    "success": true,
                    "error": "GitHub API error",
                    "details": {"message": "Branch not found"}
                })),
            },
        );
        let reply = client
            .request_publish(&PublishRequest::new("octo/hello", "# hi", "main"))
            .await
            .unwrap();
        assert!(!reply.success);
        assert_eq!(reply.failure_message(), "GitHub API error\nBranch not found");
    }

    #[tokio::test]
    async fn test_publish_401_stays_an_error() {
        let client = client(
            "/api/publish",
            CannedResponse::Status {
                status: 401,
                body: Some(json!({"error": "Not authenticated"})),
            },
        );
        assert!(matches!(
            client.request_publish(&PublishRequest::new("octo/hello", "# hi", "main")).await,
            Err(ApiError::HttpStatus { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn test_publish_error_without_body_is_http_error() {
        let client = client(
            "/api/publish",
            CannedResponse::Status {
                status: 502,
                body: None,
            },
        );
        assert!(matches!(
            client.request_publish(&PublishRequest::new("octo/hello", "# hi", "main")).await,
            Err(ApiError::HttpStatus { status: 502, body: None, .. })
        ));
    }
}
