// Shared transport configuration for building reqwest::Client instances.
//
// The registry is public and read-only, so there is no cookie jar or
// credential handling here: only timeout, user agent and the HTTPS policy.

use std::time::Duration;

use crate::error::Error;

/// User agent sent with every registry request unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("mkc-api/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
    /// Permit plain `http://` base URLs (local mirrors, test servers).
    pub allow_http: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.into(),
            allow_http: false,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .https_only(!self.allow_http)
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Allow plain-HTTP base URLs.
    pub fn with_allow_http(mut self, allow: bool) -> Self {
        self.allow_http = allow;
        self
    }
}
