//! URL construction helpers for the service endpoints.

use url::Url;

use crate::error::ApiResult;

pub const GENERATE_README_PATH: &str = "generate-readme/";
pub const IDENTITY_PATH: &str = "api/me";
pub const REPOSITORIES_PATH: &str = "api/repos";
pub const PUBLISH_PATH: &str = "api/publish";
pub const LOGIN_PATH: &str = "login";

/// Parse the configured base URL so that endpoint paths join below it.
///
/// `https://host/app` and `https://host/app/` both become `https://host/app/`.
pub fn parse_base_url(raw: &str) -> ApiResult<Url> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Build the URL of an endpoint below the base.
pub fn build_endpoint_url(base: &Url, path: &str) -> ApiResult<Url> {
    Ok(base.join(path.trim_start_matches('/'))?)
}
