//! Preference repository trait definition.
//!
//! The store is a flat key/value map, the local equivalent of browser
//! storage. No schema versioning.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::paths::PathError;

/// Errors from preference persistence.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Failed to read preferences from {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to write preferences to {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    /// Values are single lines; a line break would inject another entry.
    #[error("Value for '{key}' must not contain line breaks")]
    InvalidValue { key: String },

    #[error(transparent)]
    Path(#[from] PathError),
}

impl PreferenceError {
    /// Reject values that cannot be stored on one line.
    pub fn check_single_line(key: &str, value: &str) -> Result<(), Self> {
        if value.contains(['\n', '\r']) {
            return Err(Self::InvalidValue {
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

/// Repository for small user preferences.
///
/// # Design Rules
///
/// - String keys and values only; typing happens in `PreferenceStore`
/// - A missing key is `Ok(None)`, never an error
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;

    async fn remove(&self, key: &str) -> Result<(), PreferenceError>;
}
