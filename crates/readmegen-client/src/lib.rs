//! HTTP client for the README generation service.
//!
//! Implements `readmegen_core::ports::ReadmeBackendPort` over reqwest. Each
//! call is a single attempt bounded by the configured deadline; failures are
//! reported as the core `TransportError`.
//!
//! ```no_run
//! use readmegen_client::{ApiClientConfig, DefaultApiClient};
//! use readmegen_core::ReadmeBackendPort;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DefaultApiClient::new(&ApiClientConfig::new())?;
//! let signed_in = client.check_identity().await?;
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]
// DefaultApiClient is meant to be used through the ReadmeBackendPort trait,
// not its internal generic structure
#![allow(private_bounds)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

pub use client::{ApiClient, DefaultApiClient};
pub use config::{ApiClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, ApiResult};
