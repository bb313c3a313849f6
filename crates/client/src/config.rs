//! Connection settings for the SpendSmart API client.

use std::time::Duration;

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL of a locally running SpendSmart backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Settings used to build a [`crate::SpendSmartApiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the backend, without the `/api` prefix.
    pub base_url: String,
    /// Opaque bearer token forwarded on every request, if any.
    pub access_token: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
