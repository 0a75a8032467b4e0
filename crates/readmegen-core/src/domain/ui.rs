//! Shared UI state of the generation form.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// How long the "copied" feedback stays visible after a copy.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_millis(2000);

/// Stage of the generation state machine. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored value of the theme.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

/// Snapshot of everything the presentation layer renders for the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub phase: Phase,
    pub readme_text: String,
    pub error_message: String,
    pub theme: Theme,
    copy_feedback_until: Option<Instant>,
}

impl UiState {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// The submit action is disabled while a request is in flight.
    pub fn submit_enabled(&self) -> bool {
        self.phase != Phase::Loading
    }

    /// Whether the "copied" feedback is showing right now.
    pub fn copy_feedback_active(&self) -> bool {
        self.copy_feedback_active_at(Instant::now())
    }

    /// Whether the "copied" feedback is showing at `now`.
    pub fn copy_feedback_active_at(&self, now: Instant) -> bool {
        self.copy_feedback_until.is_some_and(|until| now < until)
    }

    /// Start (or restart) the feedback window.
    pub(crate) fn start_copy_feedback(&mut self, now: Instant) {
        self.copy_feedback_until = Some(now + COPY_FEEDBACK_WINDOW);
    }

    /// Drop results of the previous submission.
    pub(crate) fn clear_results(&mut self) {
        self.readme_text.clear();
        self.error_message.clear();
        self.copy_feedback_until = None;
    }
}
