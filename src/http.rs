//! HTTP client wrapper for OpenDrive API requests.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{OpenDriveError, Result};

/// HTTP methods used by the OpenDrive API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
            Method::Delete => f.write_str("DELETE"),
        }
    }
}

/// Raw response: status code and body text.
///
/// The body is returned even for non-success statuses, since OpenDrive puts
/// its error object in the body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One HTTP round trip.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request, with an optional JSON body, and return the raw response.
    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<HttpResponse>;
}

/// HTTP client for making requests to OpenDrive servers.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a new HTTP client with a proxy.
    pub fn with_proxy(proxy: &str) -> Result<Self> {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| OpenDriveError::Config(format!("Invalid proxy: {}", e)))?;

        let client = Client::builder()
            .proxy(proxy)
            .build()
            .map_err(|e| OpenDriveError::Config(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create an HTTP client honouring the proxy and timeout of `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| OpenDriveError::Config(format!("Invalid proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| OpenDriveError::Config(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<HttpResponse> {
        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Delete => self.client.delete(url),
        };

        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/json")
                .body(serde_json::to_string(body)?);
        }

        // reqwest errors carry the URL, which may embed the session id.
        let response = request.send().await.map_err(reqwest::Error::without_url)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        Ok(HttpResponse { status, body })
    }
}
