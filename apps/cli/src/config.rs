use std::time::Duration;

use anyhow::Context;
use spendsmart_client::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

pub struct Config {
    pub api_url: String,
    pub api_token: Option<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads the `SPENDSMART_*` variables. A `.env` file is loaded by `main`
    /// before this runs.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = lookup("SPENDSMART_API_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_token = lookup("SPENDSMART_API_TOKEN")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let timeout_secs: u64 = match lookup("SPENDSMART_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid SPENDSMART_TIMEOUT_SECS '{}'", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            anyhow::bail!("SPENDSMART_TIMEOUT_SECS must be greater than zero");
        }
        Ok(Self {
            api_url,
            api_token,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_url.as_str()).with_timeout(self.request_timeout);
        match &self.api_token {
            Some(token) => config.with_access_token(token.as_str()),
            None => config,
        }
    }
}
