//! Stub README service for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Cookie the stub treats as a signed-in session.
pub const VALID_SESSION: &str = "session=valid";

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("stub server address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    format!("http://{addr}")
}

/// A base URL nothing listens on.
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

/// The service as the client expects it.
pub fn readme_service() -> Router {
    Router::new()
        .route("/generate-readme/", post(generate))
        .route("/api/me", get(me))
        .route("/api/repos", get(repos))
        .route("/api/publish", post(publish))
}

fn signed_in(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == VALID_SESSION)
}

async fn generate(Json(body): Json<Value>) -> Json<Value> {
    let repo_url = body["repo_url"].as_str().unwrap_or_default();
    if repo_url.contains("slow") {
        tokio::time::sleep(Duration::from_secs(5)).await;
    }
    if repo_url.contains("missing") {
        return Json(json!({"readme": "Error: repository not found"}));
    }
    let method = body["generation_method"].as_str().unwrap_or_default();
    let has_key = body.get("api_key").is_some();
    Json(json!({
        "readme": format!("# {repo_url}\n\nmethod={method} key={has_key}\n")
    }))
}

async fn me(headers: HeaderMap) -> Json<Value> {
    Json(json!({"authenticated": signed_in(&headers)}))
}

async fn repos(headers: HeaderMap) -> Response {
    if !signed_in(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Not authenticated"})))
            .into_response();
    }
    Json(json!({"repos": [
        {"full_name": "octo/zeta", "description": "Last one", "private": false, "language": "Go"},
        {"full_name": "octo/alpha", "description": null, "private": true, "language": null},
    ]}))
    .into_response()
}

async fn publish(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !signed_in(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Not authenticated"})))
            .into_response();
    }
    if body["branch"] == "missing" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": "GitHub API error",
                "details": {"message": "Branch not found"}
            })),
        )
            .into_response();
    }
    Json(json!({"success": true, "echo": body})).into_response()
}
