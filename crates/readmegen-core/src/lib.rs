//! Core library for readmegen.
//!
//! This crate contains the domain types, port traits and workflows of the
//! README-generation client. It has no HTTP or terminal dependencies; the
//! `readmegen-client` crate implements the backend port and `readmegen-cli`
//! wires everything together.
//!
//! # Structure
//!
//! - `domain` - Form, request, result and UI state types
//! - `ports` - Trait abstractions for the backend, clipboard, login redirect and preferences
//! - `services` - Generation, picker and publish workflows plus the preference store
//! - `store` - Preference repository adapters
//! - `paths` - Data directory resolution

pub mod domain;
pub mod paths;
pub mod ports;
pub mod preferences;
pub mod services;
pub mod store;

pub use domain::{
    GenerationForm, GenerationMethod, GenerationRequest, GenerationResult, Phase, PublishReply,
    PublishRequest, RepoRef, RepositorySummary, Theme, UiState, ValidationError,
};
pub use ports::{
    ClipboardError, ClipboardPort, LoginRedirect, PreferenceError, PreferenceRepository,
    ReadmeBackendPort, TransportError, TransportResult,
};
pub use preferences::Preferences;
pub use services::{
    GenerationError, GenerationWorkflow, PickerError, PickerState, PreferenceStore, PublishDialog,
    PublishError, PublishOutcome, PublishWorkflow, RepositoryList, RepositoryPicker,
};
pub use store::{KeyValueFileStore, MemoryPreferenceRepository};
