//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Service client (via readmegen-client)
//! - Preference store over the key/value file (via readmegen-core)
//! - Clipboard and login redirect adapters
//!
//! Command handlers receive the composed context and drive the workflows.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use readmegen_client::{ApiClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DefaultApiClient};
use readmegen_core::{
    ClipboardPort, KeyValueFileStore, LoginRedirect, PreferenceStore, ReadmeBackendPort,
};

use crate::adapters::{SystemClipboard, TerminalLoginRedirect};
use crate::parser::Cli;
use crate::presentation::Palette;

/// Bootstrap configuration for the CLI.
#[derive(Clone)]
pub struct CliConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub session: Option<String>,
    /// Preference file; `None` uses the data directory.
    pub preferences_path: Option<PathBuf>,
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("session", &self.session.as_ref().map(|_| "<redacted>"))
            .field("preferences_path", &self.preferences_path)
            .finish()
    }
}

impl CliConfig {
    /// Resolve flags and environment (already merged by clap) over defaults.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            base_url: cli
                .base_url
                .clone()
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: cli
                .timeout_ms
                .filter(|ms| *ms > 0)
                .map_or(DEFAULT_TIMEOUT, Duration::from_millis),
            session: cli.session.clone(),
            preferences_path: None,
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    pub backend: Arc<dyn ReadmeBackendPort>,
    pub redirect: Arc<dyn LoginRedirect>,
    pub clipboard: Arc<dyn ClipboardPort>,
    pub preferences: PreferenceStore,
    pub preferences_path: PathBuf,
    pub base_url: String,
}

impl CliContext {
    /// Palette for the saved theme.
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.preferences.theme())
    }
}

/// Bootstrap the CLI application.
///
/// Builds the service client, opens the preference file and loads the saved
/// preferences once.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    tracing::debug!(?config, "Bootstrapping CLI");

    let client_config = ApiClientConfig::new()
        .with_base_url(&config.base_url)
        .with_timeout(config.timeout)
        .with_optional_session(config.session.clone());
    let client = DefaultApiClient::new(&client_config)
        .map_err(crate::CliError::from)
        .with_context(|| format!("Failed to configure client for {}", config.base_url))?;
    let login_url = client.login_url().map_err(crate::CliError::from)?;

    let store = match config.preferences_path {
        Some(path) => KeyValueFileStore::new(path),
        None => KeyValueFileStore::open_default().map_err(crate::CliError::from)?,
    };
    let preferences_path = store.path().to_path_buf();
    let preferences = PreferenceStore::load(Arc::new(store))
        .await
        .map_err(crate::CliError::from)?;

    Ok(CliContext {
        backend: Arc::new(client),
        redirect: Arc::new(TerminalLoginRedirect::new(login_url)),
        clipboard: Arc::new(SystemClipboard),
        preferences,
        preferences_path,
        base_url: config.base_url,
    })
}
