//! Generation workflow: `idle -> loading -> {success, error}`.
//!
//! The workflow owns the shared [`UiState`] and publishes every transition
//! through a `watch` channel, so the presentation layer renders whatever the
//! latest snapshot is.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::domain::{GenerationForm, GenerationResult, Phase, Theme, UiState, ValidationError};
use crate::ports::{ClipboardError, ClipboardPort, ReadmeBackendPort, TransportError};

/// File name used by download-as-file.
pub const README_FILE_NAME: &str = "README.md";

/// Busy text shown while a generation request is in flight.
pub const GENERATING_MESSAGE: &str = "Generating README...";

/// Why a submission did not produce a README.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service answered with the reserved error prefix.
    #[error("{0}")]
    Semantic(String),

    /// A request from this form is still in flight.
    #[error("a README is already being generated")]
    InFlight,
}

impl GenerationError {
    /// Message placed in the UI state for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(TransportError::TimedOut) => "request timed out".to_string(),
            Self::Transport(TransportError::Network(detail)) => format!("network error: {detail}"),
            Self::Transport(TransportError::Http { .. }) => {
                "generation failed, check the URL and server".to_string()
            }
            Self::Transport(TransportError::Parse(_)) => "unexpected server response".to_string(),
            other => other.to_string(),
        }
    }

    /// The front end should offer to supply an API key.
    pub const fn needs_api_key(&self) -> bool {
        matches!(self, Self::Validation(ValidationError::MissingApiKey))
    }
}

/// Failures of the copy and download actions on a generated README.
#[derive(Debug, Error)]
pub enum ResultActionError {
    #[error("no README has been generated yet")]
    NoReadme,

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Drives one generation form.
pub struct GenerationWorkflow {
    backend: Arc<dyn ReadmeBackendPort>,
    state: watch::Sender<UiState>,
}

impl GenerationWorkflow {
    pub fn new(backend: Arc<dyn ReadmeBackendPort>, theme: Theme) -> Self {
        let (state, _) = watch::channel(UiState::with_theme(theme));
        Self { backend, state }
    }

    /// Receive every state transition.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.state.send_if_modified(|state| {
            let changed = state.theme != theme;
            state.theme = theme;
            changed
        });
    }

    /// Validate the form and run one generation request.
    ///
    /// Returns [`GenerationError::InFlight`] without touching the state when
    /// a request is already running. Dropping the returned future while it
    /// waits for the backend puts the form back to idle.
    pub async fn submit(
        &self,
        form: &GenerationForm,
        saved_api_key: Option<&str>,
    ) -> Result<String, GenerationError> {
        let mut started = Err(GenerationError::InFlight);
        self.state.send_if_modified(|state| {
            if state.phase == Phase::Loading {
                return false;
            }
            state.clear_results();
            match form.to_request(saved_api_key) {
                Ok(request) => {
                    state.phase = Phase::Loading;
                    started = Ok(request);
                }
                Err(e) => {
                    let err = GenerationError::from(e);
                    state.phase = Phase::Error;
                    state.error_message = err.user_message();
                    started = Err(err);
                }
            }
            true
        });
        let request = started?;

        debug!(repo_url = %request.repo_url, method = %request.method, "Submitting generation request");
        let guard = LoadingGuard::new(&self.state);
        let response = self.backend.generate_readme(&request).await;
        guard.disarm();

        let outcome = match response {
            Ok(readme) => match GenerationResult::from_readme_field(readme) {
                GenerationResult::Readme(text) => Ok(text),
                GenerationResult::Error(message) => Err(GenerationError::Semantic(message)),
            },
            Err(e) => Err(GenerationError::Transport(e)),
        };

        self.state.send_modify(|state| match &outcome {
            Ok(text) => {
                state.phase = Phase::Success;
                state.readme_text.clone_from(text);
            }
            Err(err) => {
                state.phase = Phase::Error;
                state.error_message = err.user_message();
            }
        });

        match &outcome {
            Ok(text) => info!(bytes = text.len(), "README generated"),
            Err(err) => warn!(error = %err, "README generation failed"),
        }
        outcome
    }

    /// Copy the generated README and start the "copied" feedback window.
    ///
    /// A repeat copy restarts the window. The phase never changes.
    pub fn copy_to_clipboard(&self, clipboard: &dyn ClipboardPort) -> Result<(), ResultActionError> {
        let readme = self.generated_readme()?;
        if let Err(e) = clipboard.write_text(&readme) {
            warn!(error = %e, "Clipboard write failed");
            return Err(e.into());
        }
        let now = Instant::now();
        self.state.send_modify(|state| state.start_copy_feedback(now));
        Ok(())
    }

    /// Write the generated README as `README.md` into `dir`.
    pub async fn download(&self, dir: &Path) -> Result<PathBuf, ResultActionError> {
        let readme = self.generated_readme()?;
        let path = dir.join(README_FILE_NAME);
        tokio::fs::write(&path, readme)
            .await
            .map_err(|source| ResultActionError::Write {
                path: path.clone(),
                source,
            })?;
        info!(path = %path.display(), "README saved");
        Ok(path)
    }

    fn generated_readme(&self) -> Result<String, ResultActionError> {
        let state = self.state.borrow();
        if state.phase == Phase::Success && !state.readme_text.is_empty() {
            Ok(state.readme_text.clone())
        } else {
            Err(ResultActionError::NoReadme)
        }
    }
}

/// Resets a still-loading form to idle if the submit future is dropped.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<UiState>,
    armed: bool,
}

impl<'a> LoadingGuard<'a> {
    const fn new(state: &'a watch::Sender<UiState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.state.send_if_modified(|state| {
            if state.phase == Phase::Loading {
                debug!("Generation cancelled, returning to idle");
                state.phase = Phase::Idle;
                true
            } else {
                false
            }
        });
    }
}
