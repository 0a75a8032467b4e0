//! Repository summaries shown by the picker and GitHub repository references.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Base URL used to turn a full name into a repository URL.
pub const GITHUB_BASE_URL: &str = "https://github.com";

/// One entry of the authenticated user's repository list.
///
/// Snapshots are fetched per picker session and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Unique key, `owner/name`.
    pub full_name: String,
    pub description: Option<String>,
    pub is_private: bool,
    pub primary_language: Option<String>,
}

impl RepositorySummary {
    /// Repository URL written into the generation form on selection.
    pub fn url(&self) -> String {
        format!("{GITHUB_BASE_URL}/{}", self.full_name)
    }

    /// Short label displayed next to the entry.
    pub fn badge_label(&self) -> &str {
        if self.is_private {
            "Private"
        } else {
            self.primary_language
                .as_deref()
                .filter(|lang| !lang.is_empty())
                .unwrap_or("Public")
        }
    }

    /// Case-insensitive substring match on full name or description.
    ///
    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.full_name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

/// Sort ascending by full name (case-sensitive, lexical).
pub fn sort_repositories(repos: &mut [RepositorySummary]) {
    repos.sort_by(|a, b| a.full_name.cmp(&b.full_name));
}

/// Derive the visible list for a filter query.
///
/// Pure: the input is never modified and relative order is kept. An empty
/// query returns every entry.
pub fn filter_repositories(repos: &[RepositorySummary], query: &str) -> Vec<RepositorySummary> {
    let needle = query.to_lowercase();
    repos
        .iter()
        .filter(|repo| repo.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Reference to a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse an `owner/name` full name.
    pub fn parse(full_name: &str) -> Option<Self> {
        let (owner, name) = full_name.trim().split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self::new(owner, name))
    }

    /// Extract owner and name from a `github.com` repository URL.
    ///
    /// Accepts extra path segments (`/tree/main/...`), strips a trailing
    /// `.git`, ignores query and fragment.
    pub fn from_github_url(repo_url: &str) -> Option<Self> {
        let url = Url::parse(repo_url.trim()).ok()?;
        if url.host_str() != Some("github.com") {
            return None;
        }

        let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
        let owner = segments.next()?;
        let name = segments.next()?;
        let name = name.strip_suffix(".git").unwrap_or(name);
        if name.is_empty() {
            return None;
        }
        Some(Self::new(owner, name))
    }

    /// The `owner/name` form.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
