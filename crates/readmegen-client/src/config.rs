//! Public configuration for the README service client.

use std::fmt;
use std::time::Duration;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Deadline applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the README service client.
///
/// # Example
///
/// ```
/// use readmegen_client::ApiClientConfig;
/// use std::time::Duration;
///
/// let config = ApiClientConfig::new()
///     .with_base_url("https://readme.example.com")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Clone)]
pub struct ApiClientConfig {
    /// Root of the service; endpoint paths are joined onto it.
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    /// Deadline for a single request, including reading the body.
    pub(crate) timeout: Duration,
    /// Raw `Cookie` header value carrying the service session.
    pub(crate) session: Option<String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("readmegen-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_TIMEOUT,
            session: None,
        }
    }
}

impl fmt::Debug for ApiClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClientConfig")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("session", &self.session.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ApiClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults to `http://localhost:8000`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send this value as the `Cookie` header, e.g. `session=abc123`.
    #[must_use]
    pub fn with_session(mut self, cookie: impl Into<String>) -> Self {
        self.session = Some(cookie.into());
        self
    }

    /// Set an optional session; blank values are ignored.
    #[must_use]
    pub fn with_optional_session(mut self, cookie: Option<String>) -> Self {
        self.session = cookie.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
