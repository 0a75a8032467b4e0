//! System clipboard port.

use thiserror::Error;

/// The clipboard could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

#[cfg_attr(test, mockall::automock)]
pub trait ClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
