//! Repository picker workflow.
//!
//! `closed -> auth_checking -> {unauthenticated, open}`, and inside `open`
//! `loading -> {ready, failed}`. The fetched list is cached for the picker
//! session and filtered client-side.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{GenerationForm, RepositorySummary, filter_repositories, sort_repositories};
use crate::ports::{LoginRedirect, ReadmeBackendPort, TransportError};

/// Shown inside the open picker when the list cannot be fetched.
pub const LIST_FAILED_MESSAGE: &str = "Failed to fetch repositories.";

/// Shown after the picker closes because the identity check failed.
pub const PICKER_UNAVAILABLE_MESSAGE: &str =
    "Something went wrong while loading your repositories.";

/// List state inside an open picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryList {
    Loading,
    Ready(Vec<RepositorySummary>),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PickerState {
    #[default]
    Closed,
    AuthChecking,
    /// The user was sent to the login flow; the picker did not open.
    Unauthenticated,
    Open(RepositoryList),
}

impl PickerState {
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("sign in required")]
    AuthRequired,

    #[error("Something went wrong while loading your repositories.")]
    IdentityCheck(#[source] TransportError),

    #[error("the repository list is not open")]
    NotOpen,

    #[error("repository '{0}' is not in the list")]
    UnknownRepository(String),
}

/// One picker session at a time.
pub struct RepositoryPicker {
    backend: Arc<dyn ReadmeBackendPort>,
    redirect: Arc<dyn LoginRedirect>,
    state: PickerState,
    query: String,
    notice: Option<&'static str>,
}

impl RepositoryPicker {
    pub fn new(backend: Arc<dyn ReadmeBackendPort>, redirect: Arc<dyn LoginRedirect>) -> Self {
        Self {
            backend,
            redirect,
            state: PickerState::Closed,
            query: String::new(),
            notice: None,
        }
    }

    pub const fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Message left behind when the picker had to close.
    pub const fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Check the session, then fetch the repository list.
    ///
    /// An unauthenticated session (or a 401 from either call) redirects to
    /// the login flow and returns [`PickerError::AuthRequired`]. A failed
    /// list fetch still opens the picker, with [`RepositoryList::Failed`].
    pub async fn open(&mut self) -> Result<(), PickerError> {
        self.query.clear();
        self.notice = None;
        self.state = PickerState::AuthChecking;

        match self.backend.check_identity().await {
            Ok(true) => {}
            Ok(false) => return Err(self.require_login()),
            Err(e) if e.is_unauthorized() => return Err(self.require_login()),
            Err(e) => {
                warn!(error = %e, "Identity check failed");
                self.state = PickerState::Closed;
                self.notice = Some(PICKER_UNAVAILABLE_MESSAGE);
                return Err(PickerError::IdentityCheck(e));
            }
        }

        self.state = PickerState::Open(RepositoryList::Loading);
        debug!("Fetching repositories");
        match self.backend.list_repositories().await {
            Ok(mut repos) => {
                sort_repositories(&mut repos);
                info!(count = repos.len(), "Repositories loaded");
                self.state = PickerState::Open(RepositoryList::Ready(repos));
            }
            Err(e) if e.is_unauthorized() => return Err(self.require_login()),
            Err(e) => {
                warn!(error = %e, "Repository list fetch failed");
                self.state =
                    PickerState::Open(RepositoryList::Failed(LIST_FAILED_MESSAGE.to_string()));
            }
        }
        Ok(())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Entries matching the current query, or `None` when no list is ready.
    ///
    /// An empty vector is the empty state.
    pub fn visible(&self) -> Option<Vec<RepositorySummary>> {
        match &self.state {
            PickerState::Open(RepositoryList::Ready(repos)) => {
                Some(filter_repositories(repos, &self.query))
            }
            _ => None,
        }
    }

    /// Write the chosen repository's URL into the form and close the picker.
    pub fn select(&mut self, full_name: &str, form: &mut GenerationForm) -> Result<(), PickerError> {
        let PickerState::Open(RepositoryList::Ready(repos)) = &self.state else {
            return Err(PickerError::NotOpen);
        };
        let url = repos
            .iter()
            .find(|r| r.full_name == full_name)
            .map(RepositorySummary::url)
            .ok_or_else(|| PickerError::UnknownRepository(full_name.to_string()))?;

        form.repo_url = url;
        debug!(repo = full_name, "Repository selected");
        self.close();
        Ok(())
    }

    /// End the session and drop the cached list.
    pub fn close(&mut self) {
        self.state = PickerState::Closed;
        self.query.clear();
    }

    fn require_login(&mut self) -> PickerError {
        info!("Session is not authenticated, redirecting to login");
        self.state = PickerState::Unauthenticated;
        self.redirect.redirect_to_login();
        PickerError::AuthRequired
    }
}
