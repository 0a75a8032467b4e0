//! README service port.

use async_trait::async_trait;

use super::transport::TransportResult;
use crate::domain::{GenerationRequest, PublishReply, PublishRequest, RepositorySummary};

/// Port trait for the README-generation backend.
///
/// The implementation lives in `readmegen-client`. Each method is a single
/// attempt bounded by the client's deadline; retry policy, if any, belongs to
/// the caller.
#[async_trait]
pub trait ReadmeBackendPort: Send + Sync {
    /// `POST /generate-readme/`, returning the raw `readme` field.
    ///
    /// A value starting with the reserved error prefix is still `Ok` here.
    async fn generate_readme(&self, request: &GenerationRequest) -> TransportResult<String>;

    /// `GET /api/me`, returning whether the session is authenticated.
    async fn check_identity(&self) -> TransportResult<bool>;

    /// `GET /api/repos`, in server order.
    async fn list_repositories(&self) -> TransportResult<Vec<RepositorySummary>>;

    /// `POST /api/publish`.
    ///
    /// A 401 is reported as `TransportError::Http { status: 401 }`; other
    /// non-2xx answers with a readable body come back as an unsuccessful
    /// [`PublishReply`].
    async fn publish(&self, request: &PublishRequest) -> TransportResult<PublishReply>;
}
