//! Transport-level failures reported by the request client.

use thiserror::Error;

/// A failure to complete the network exchange.
///
/// Business-level failures inside a well-formed response are not transport
/// errors; workflows detect those themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The deadline expired and the in-flight call was cancelled.
    #[error("request timed out")]
    TimedOut,

    /// Connection refused, DNS failure, reset, ...
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Http { status: u16 },

    /// The body was not the JSON shape the endpoint promises.
    #[error("unexpected server response: {0}")]
    Parse(String),
}

impl TransportError {
    /// A 401 means the session is gone and the user must sign in again.
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401 })
    }
}

/// Result type alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
