//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the workflows expect from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or other transport types in any signature
//! - Transport failures are expressed with [`TransportError`] only
//! - Side effects the user sees (login redirect, clipboard) are ports too,
//!   so workflows stay testable without a terminal

pub mod backend;
pub mod clipboard;
pub mod navigation;
pub mod preferences;
pub mod transport;

pub use backend::ReadmeBackendPort;
pub use clipboard::{ClipboardError, ClipboardPort};
pub use navigation::LoginRedirect;
pub use preferences::{PreferenceError, PreferenceRepository};
pub use transport::{TransportError, TransportResult};
