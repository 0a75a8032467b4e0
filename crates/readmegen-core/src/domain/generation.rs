//! Generation form, request and result types.
//!
//! The form is the mutable state behind the "generate" action. Submitting it
//! produces an immutable [`GenerationRequest`]; the backend's answer is
//! classified into a [`GenerationResult`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Prefix the backend uses to report a failure inside a successful response.
///
/// A legitimate README starting with this literal text is indistinguishable
/// from a failure. Kept for compatibility with the service.
pub const ERROR_PREFIX: &str = "Error:";

/// How the backend should produce the README.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMethod {
    /// Fill the service's built-in template.
    #[default]
    Template,
    /// Let the service ask an LLM; requires the user's API key.
    Ai,
}

impl GenerationMethod {
    /// Wire value of the method.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Ai => "ai",
        }
    }

    /// Whether requests with this method must carry an API key.
    pub const fn requires_api_key(self) -> bool {
        matches!(self, Self::Ai)
    }
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" => Ok(Self::Template),
            "ai" => Ok(Self::Ai),
            other => Err(format!("unknown generation method '{other}' (expected template or ai)")),
        }
    }
}

/// Errors caught before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing repository URL")]
    MissingRepoUrl,

    #[error("invalid repository URL")]
    InvalidRepoUrl(String),

    #[error("missing API key")]
    MissingApiKey,
}

/// Mutable form state behind the generate action.
///
/// Empty strings stand for "not provided".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GenerationForm {
    pub repo_url: String,
    pub buy_me_a_coffee_user: String,
    pub twitter_user: String,
    pub linkedin_user: String,
    pub method: GenerationMethod,
    pub api_key: String,
}

impl fmt::Debug for GenerationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationForm")
            .field("repo_url", &self.repo_url)
            .field("buy_me_a_coffee_user", &self.buy_me_a_coffee_user)
            .field("twitter_user", &self.twitter_user)
            .field("linkedin_user", &self.linkedin_user)
            .field("method", &self.method)
            .field("api_key", &redacted(&self.api_key))
            .finish()
    }
}

impl GenerationForm {
    /// Create a template-method form for the given repository URL.
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            ..Self::default()
        }
    }

    /// Validate the form and freeze it into a request.
    ///
    /// `saved_api_key` is the key kept in the preference store; the form's own
    /// key wins when both are present. The key is only attached for
    /// [`GenerationMethod::Ai`].
    pub fn to_request(&self, saved_api_key: Option<&str>) -> Result<GenerationRequest, ValidationError> {
        let repo_url = self.repo_url.trim();
        if repo_url.is_empty() {
            return Err(ValidationError::MissingRepoUrl);
        }
        if !is_http_url(repo_url) {
            return Err(ValidationError::InvalidRepoUrl(repo_url.to_string()));
        }

        let api_key = if self.method.requires_api_key() {
            let key = non_empty(&self.api_key)
                .or_else(|| saved_api_key.and_then(non_empty))
                .ok_or(ValidationError::MissingApiKey)?;
            Some(key)
        } else {
            None
        };

        Ok(GenerationRequest {
            repo_url: repo_url.to_string(),
            buy_me_a_coffee_user: non_empty(&self.buy_me_a_coffee_user),
            twitter_user: non_empty(&self.twitter_user),
            linkedin_user: non_empty(&self.linkedin_user),
            method: self.method,
            api_key,
        })
    }
}

/// A validated, immutable generation request.
#[derive(Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub repo_url: String,
    pub buy_me_a_coffee_user: Option<String>,
    pub twitter_user: Option<String>,
    pub linkedin_user: Option<String>,
    pub method: GenerationMethod,
    pub api_key: Option<String>,
}

impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("repo_url", &self.repo_url)
            .field("buy_me_a_coffee_user", &self.buy_me_a_coffee_user)
            .field("twitter_user", &self.twitter_user)
            .field("linkedin_user", &self.linkedin_user)
            .field("method", &self.method)
            .field("api_key", &self.api_key.as_deref().map(redacted))
            .finish()
    }
}

/// Outcome of a generation call that completed at the transport level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Readme(String),
    Error(String),
}

impl GenerationResult {
    /// Classify the backend's `readme` field.
    pub fn from_readme_field(readme: String) -> Self {
        if readme.starts_with(ERROR_PREFIX) {
            Self::Error(readme)
        } else {
            Self::Readme(readme)
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

const fn redacted(value: &str) -> &'static str {
    if value.is_empty() { "" } else { "<redacted>" }
}
