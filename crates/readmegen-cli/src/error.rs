//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and mappings
//! from core errors to exit codes and user-facing messages.

use readmegen_client::ApiError;
use readmegen_core::services::ResultActionError;
use readmegen_core::{GenerationError, PickerError, PreferenceError, PublishError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The workflow finished with an error already shown to the user.
    #[error("{0}")]
    Failed(String),

    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The service could not be reached or answered unexpectedly.
    #[error("Service error: {0}")]
    Service(String),

    /// The session is missing or expired. The login redirect has already
    /// told the user where to sign in.
    #[error("Sign in required")]
    AuthRequired,

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration or preference storage error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Failed(_) => 1,
            Self::Arguments(_) => 2,
            Self::Service(_) => 69,    // EX_UNAVAILABLE
            Self::Io(_) => 74,         // EX_IOERR
            Self::AuthRequired => 77,  // EX_NOPERM
            Self::Config(_) => 78,     // EX_CONFIG
        }
    }
}

// Generation and publish failures are rendered by their views before the
// handler returns, so both map to `Failed`.
impl From<GenerationError> for CliError {
    fn from(err: GenerationError) -> Self {
        Self::Failed(err.user_message())
    }
}

impl From<PublishError> for CliError {
    fn from(err: PublishError) -> Self {
        Self::Failed(err.user_message())
    }
}

impl From<ResultActionError> for CliError {
    fn from(err: ResultActionError) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<PickerError> for CliError {
    fn from(err: PickerError) -> Self {
        match err {
            PickerError::AuthRequired => Self::AuthRequired,
            PickerError::IdentityCheck(_) => Self::Service(err.to_string()),
            PickerError::NotOpen | PickerError::UnknownRepository(_) => {
                Self::Arguments(err.to_string())
            }
        }
    }
}

impl From<PreferenceError> for CliError {
    fn from(err: PreferenceError) -> Self {
        match err {
            PreferenceError::InvalidValue { .. } => Self::Arguments(err.to_string()),
            other => Self::Config(other.to_string()),
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error returned from a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

/// Whether `main` still has to print the error.
///
/// `Failed` was rendered by a view and `AuthRequired` by the login redirect;
/// both only set the exit code.
pub fn needs_report(err: &anyhow::Error) -> bool {
    !matches!(
        err.downcast_ref::<CliError>(),
        Some(CliError::Failed(_) | CliError::AuthRequired)
    )
}
