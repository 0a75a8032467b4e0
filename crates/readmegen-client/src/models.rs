//! Wire types of the service endpoints.
//!
//! These types are internal to `readmegen-client`. Consumers see the domain
//! types from `readmegen-core`.

use serde::{Deserialize, Serialize};

/// Body of `POST /generate-readme/`. Absent optional fields are omitted.
#[derive(Debug, Serialize)]
pub struct GenerateReadmeBody<'a> {
    pub repo_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_me_a_coffee_user: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_user: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_user: Option<&'a str>,
    pub generation_method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateReadmeResponse {
    pub readme: String,
}

#[derive(Debug, Deserialize)]
pub struct IdentityResponse {
    #[serde(default)]
    pub authenticated: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct RepositoriesResponse {
    #[serde(default)]
    pub repos: Vec<RepositoryEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryEntry {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub language: Option<String>,
}

/// Body of `POST /api/publish`.
#[derive(Debug, Serialize)]
pub struct PublishBody<'a> {
    pub full_name: &'a str,
    pub content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
    pub branch: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct PublishResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<PublishDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PublishDetails {
    #[serde(default)]
    pub message: Option<String>,
}
