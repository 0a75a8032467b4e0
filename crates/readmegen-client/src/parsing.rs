//! Conversion between wire JSON and domain types.
//!
//! Every response is validated here, at the boundary; nothing past this
//! module sees raw JSON.

use readmegen_core::{GenerationRequest, PublishReply, PublishRequest, RepositorySummary};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    GenerateReadmeBody, GenerateReadmeResponse, IdentityResponse, PublishBody, PublishResponse,
    RepositoriesResponse, RepositoryEntry,
};

fn decode<T: DeserializeOwned>(endpoint: &str, json: Value) -> ApiResult<T> {
    serde_json::from_value(json).map_err(|e| ApiError::invalid(format!("{endpoint}: {e}")))
}

pub fn generate_body(request: &GenerationRequest) -> ApiResult<Value> {
    let body = GenerateReadmeBody {
        repo_url: &request.repo_url,
        buy_me_a_coffee_user: request.buy_me_a_coffee_user.as_deref(),
        twitter_user: request.twitter_user.as_deref(),
        linkedin_user: request.linkedin_user.as_deref(),
        generation_method: request.method.as_str(),
        api_key: request.api_key.as_deref(),
    };
    Ok(serde_json::to_value(body)?)
}

pub fn publish_body(request: &PublishRequest) -> ApiResult<Value> {
    let body = PublishBody {
        full_name: &request.full_name,
        content: &request.content,
        message: request.commit_message.as_deref(),
        branch: &request.branch,
    };
    Ok(serde_json::to_value(body)?)
}

/// The raw `readme` field; prefix classification happens in the workflow.
pub fn parse_readme(json: Value) -> ApiResult<String> {
    decode::<GenerateReadmeResponse>("generate-readme", json).map(|r| r.readme)
}

/// A missing `authenticated` flag counts as not signed in.
pub fn parse_identity(json: Value) -> ApiResult<bool> {
    decode::<IdentityResponse>("me", json).map(|r| r.authenticated)
}

/// Repositories in server order. Entries without a full name are dropped.
pub fn parse_repositories(json: Value) -> ApiResult<Vec<RepositorySummary>> {
    let response: RepositoriesResponse = decode("repos", json)?;
    let total = response.repos.len();
    let repos: Vec<_> = response
        .repos
        .into_iter()
        .filter_map(to_repository_summary)
        .collect();
    if repos.len() < total {
        debug!(dropped = total - repos.len(), "Ignoring repositories without a name");
    }
    Ok(repos)
}

fn to_repository_summary(entry: RepositoryEntry) -> Option<RepositorySummary> {
    let full_name = entry.full_name.filter(|n| !n.is_empty())?;
    Some(RepositorySummary {
        full_name,
        description: entry.description.filter(|d| !d.is_empty()),
        is_private: entry.private,
        primary_language: entry.language.filter(|l| !l.is_empty()),
    })
}

pub fn parse_publish_reply(json: Value) -> ApiResult<PublishReply> {
    let response: PublishResponse = decode("publish", json)?;
    Ok(PublishReply {
        success: response.success,
        error: response.error,
        detail_message: response.details.and_then(|d| d.message),
    })
}
