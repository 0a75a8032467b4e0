//! Domain types shared by the workflows and the adapters.
//!
//! These are plain data types with no infrastructure dependencies.

mod generation;
mod publish;
mod repository;
mod ui;

pub use generation::{
    ERROR_PREFIX, GenerationForm, GenerationMethod, GenerationRequest, GenerationResult,
    ValidationError,
};
pub use publish::{DEFAULT_BRANCH, PUBLISH_FAILED_MESSAGE, PublishReply, PublishRequest};
pub use repository::{
    GITHUB_BASE_URL, RepoRef, RepositorySummary, filter_repositories, sort_repositories,
};
pub use ui::{COPY_FEEDBACK_WINDOW, Phase, Theme, UiState};
