//! Publish workflow: push generated README content to a repository branch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{DEFAULT_BRANCH, PUBLISH_FAILED_MESSAGE, PublishRequest};
use crate::ports::{LoginRedirect, ReadmeBackendPort, TransportError};

/// Acknowledgement shown after a successful publish.
pub const PUBLISHED_MESSAGE: &str = "README published successfully!";

/// Busy text shown while a publish request is in flight.
pub const PUBLISHING_MESSAGE: &str = "Publishing to GitHub...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Published,
    /// The session expired and the user was sent to the login flow.
    RedirectedToLogin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    #[error("missing repository or README content")]
    MissingTarget,

    /// The service answered with a falsy `success` flag.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("a publish is already in progress")]
    InFlight,
}

impl PublishError {
    /// Message shown inline in the dialog.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => PUBLISH_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// State of the confirm control and busy indicator.
///
/// Shared with the presentation layer, which reads it to disable the confirm
/// action and show the spinner.
#[derive(Debug)]
pub struct PublishControls {
    confirm_enabled: AtomicBool,
    busy: AtomicBool,
}

impl Default for PublishControls {
    fn default() -> Self {
        Self {
            confirm_enabled: AtomicBool::new(true),
            busy: AtomicBool::new(false),
        }
    }
}

impl PublishControls {
    pub fn confirm_enabled(&self) -> bool {
        self.confirm_enabled.load(Ordering::Acquire)
    }

    pub fn busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    fn try_begin(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        self.confirm_enabled.store(false, Ordering::Release);
        Some(BusyGuard { controls: self })
    }
}

/// Re-enables confirm and hides the busy indicator on every exit path.
struct BusyGuard<'a> {
    controls: &'a PublishControls,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.controls.confirm_enabled.store(true, Ordering::Release);
        self.controls.busy.store(false, Ordering::Release);
    }
}

/// Modal state of the publish dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishDialog {
    pub open: bool,
    /// Target repository, `owner/name`.
    pub full_name: String,
    pub branch: String,
    pub commit_message: String,
    pub error: Option<String>,
    pub acknowledgement: Option<String>,
}

impl PublishDialog {
    /// Open the dialog prefilled for a repository, clearing earlier results.
    pub fn open_for(&mut self, full_name: impl Into<String>, branch: Option<&str>) {
        self.open = true;
        self.full_name = full_name.into();
        self.branch = branch
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_BRANCH)
            .to_string();
        self.commit_message.clear();
        self.error = None;
        self.acknowledgement = None;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    fn to_request(&self, content: &str) -> PublishRequest {
        PublishRequest::new(self.full_name.trim(), content, self.branch.trim())
            .with_commit_message(self.commit_message.clone())
    }
}

pub struct PublishWorkflow {
    backend: Arc<dyn ReadmeBackendPort>,
    redirect: Arc<dyn LoginRedirect>,
    controls: Arc<PublishControls>,
}

impl PublishWorkflow {
    pub fn new(backend: Arc<dyn ReadmeBackendPort>, redirect: Arc<dyn LoginRedirect>) -> Self {
        Self {
            backend,
            redirect,
            controls: Arc::new(PublishControls::default()),
        }
    }

    pub fn controls(&self) -> Arc<PublishControls> {
        Arc::clone(&self.controls)
    }

    /// Send one publish request.
    ///
    /// Validation happens before the confirm control is touched; a 401 is
    /// answered with a login redirect instead of an error.
    pub async fn publish(&self, request: &PublishRequest) -> Result<PublishOutcome, PublishError> {
        if !request.has_target_and_content() {
            return Err(PublishError::MissingTarget);
        }
        let _busy = self.controls.try_begin().ok_or(PublishError::InFlight)?;

        debug!(repo = %request.full_name, branch = %request.branch, "Publishing README");
        match self.backend.publish(request).await {
            Ok(reply) if reply.success => {
                info!(repo = %request.full_name, "README published");
                Ok(PublishOutcome::Published)
            }
            Ok(reply) => {
                let message = reply.failure_message();
                warn!(repo = %request.full_name, %message, "Publish rejected");
                Err(PublishError::Rejected(message))
            }
            Err(e) if e.is_unauthorized() => {
                info!("Publish requires sign in, redirecting to login");
                self.redirect.redirect_to_login();
                Ok(PublishOutcome::RedirectedToLogin)
            }
            Err(e) => {
                warn!(error = %e, "Publish request failed");
                Err(PublishError::Transport(e))
            }
        }
    }

    /// Confirm the dialog with the given README content.
    ///
    /// Success closes the dialog with an acknowledgement; failures are shown
    /// in the dialog, which stays open.
    pub async fn confirm(
        &self,
        dialog: &mut PublishDialog,
        content: &str,
    ) -> Result<PublishOutcome, PublishError> {
        dialog.error = None;
        dialog.acknowledgement = None;

        let result = self.publish(&dialog.to_request(content)).await;
        match &result {
            Ok(PublishOutcome::Published) => {
                dialog.close();
                dialog.acknowledgement = Some(PUBLISHED_MESSAGE.to_string());
            }
            Ok(PublishOutcome::RedirectedToLogin) => dialog.close(),
            Err(e) => dialog.error = Some(e.user_message()),
        }
        result
    }
}
