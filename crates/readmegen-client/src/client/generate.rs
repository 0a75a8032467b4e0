//! README generation endpoint.

use readmegen_core::GenerationRequest;
use tracing::debug;

use super::ApiClient;
use crate::error::ApiResult;
use crate::http::{ErrorBody, HttpBackend, HttpMethod};
use crate::parsing::{generate_body, parse_readme};
use crate::url::GENERATE_README_PATH;

impl<B: HttpBackend> ApiClient<B> {
    /// Ask the service for a README. Returns the raw `readme` field.
    pub(crate) async fn request_readme(&self, request: &GenerationRequest) -> ApiResult<String> {
        let body = generate_body(request)?;
        let json = self
            .send(HttpMethod::Post, GENERATE_README_PATH, Some(&body), ErrorBody::Discard)
            .await?;
        let readme = parse_readme(json)?;
        debug!(bytes = readme.len(), "Received README");
        Ok(readme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiClientConfig;
    use crate::error::ApiError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use readmegen_core::GenerationForm;
    use serde_json::json;

    fn request() -> GenerationRequest {
        GenerationForm::new("https://github.com/octo/hello")
            .to_request(None)
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_posts_body_and_returns_readme() {
        let backend = FakeBackend::new().with_response(
            "/generate-readme/",
            CannedResponse::Json(json!({"readme": "# hello"})),
        );
        let client = ApiClient::with_backend(&ApiClientConfig::new(), backend);

        assert_eq!(client.request_readme(&request()).await.unwrap(), "# hello");

        let sent = client.backend.recorded();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].url, "http://localhost:8000/generate-readme/");
        assert_eq!(
            sent[0].body.as_ref().unwrap()["repo_url"],
            "https://github.com/octo/hello"
        );
    }

    #[tokio::test]
    async fn test_error_prefixed_readme_is_not_a_transport_error() {
        let backend = FakeBackend::new().with_response(
            "/generate-readme/",
            CannedResponse::Json(json!({"readme": "Error: repository not found"})),
        );
        let client = ApiClient::with_backend(&ApiClientConfig::new(), backend);

        assert_eq!(
            client.request_readme(&request()).await.unwrap(),
            "Error: repository not found"
        );
    }

    #[tokio::test]
    async fn test_non_2xx_body_is_ignored() {
        let backend = FakeBackend::new().with_response(
            "/generate-readme/",
            CannedResponse::Status {
                status: 422,
                body: Some(json!({"detail": "bad"})),
            },
        );
        let client = ApiClient::with_backend(&ApiClientConfig::new(), backend);

        assert!(matches!(
            client.request_readme(&request()).await,
            Err(ApiError::HttpStatus { status: 422, body: None, .. })
        ));
    }
}
