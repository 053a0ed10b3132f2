//! Client configuration.

use std::env;
use std::time::Duration;

/// Default OpenDrive API endpoint.
pub const DEFAULT_API_URL: &str = "https://dev.opendrive.com/api/v1";

/// Settings used when building an [`OpenDriveClient`](crate::OpenDriveClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API, without trailing slash.
    pub api_url: String,
    /// Proxy URL (e.g., "http://proxy:8080" or "socks5://proxy:1080")
    pub proxy: Option<String>,
    /// Per-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Application version sent at login (max 10 chars).
    pub version: String,
    /// Partner username sent at login, empty for OpenDrive itself.
    pub partner_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            proxy: None,
            timeout: None,
            version: String::new(),
            partner_id: String::new(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from `OPENDRIVE_API_URL`, `OPENDRIVE_PROXY` and
    /// `OPENDRIVE_TIMEOUT_SECS`. Unset or unparsable values keep defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("OPENDRIVE_API_URL").filter(|v| !v.is_empty()) {
            config = config.with_api_url(url);
        }
        if let Some(proxy) = lookup("OPENDRIVE_PROXY").filter(|v| !v.is_empty()) {
            config = config.with_proxy(proxy);
        }
        if let Some(secs) = lookup("OPENDRIVE_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_partner_id(mut self, partner_id: impl Into<String>) -> Self {
        self.partner_id = partner_id.into();
        self
    }
}
