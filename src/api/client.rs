//! OpenDrive API client with request/response handling.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::ApiErrorCode;
use crate::config::{ClientConfig, DEFAULT_API_URL};
use crate::error::{OpenDriveError, Result};
use crate::http::{HttpClient, HttpResponse, Method, Transport};

/// OpenDrive API client.
///
/// Sends one request per call, inspects the body for an `error` object and
/// returns the decoded payload. There is no retry.
#[derive(Debug)]
pub struct ApiClient<T = HttpClient> {
    transport: T,
    base_url: String,
}

impl ApiClient<HttpClient> {
    /// Create a new API client against the public endpoint.
    pub fn new() -> Self {
        Self::with_transport(HttpClient::new(), DEFAULT_API_URL)
    }

    /// Create a new API client with a proxy.
    ///
    /// # Arguments
    /// * `proxy` - Proxy URL (e.g., "http://proxy:8080" or "socks5://proxy:1080")
    pub fn with_proxy(proxy: &str) -> Result<Self> {
        Ok(Self::with_transport(
            HttpClient::with_proxy(proxy)?,
            DEFAULT_API_URL,
        ))
    }

    /// Create an API client from a full configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(
            HttpClient::from_config(config)?,
            config.api_url.as_str(),
        ))
    }
}

impl Default for ApiClient<HttpClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create an API client that sends through `transport`.
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Make an API request.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `endpoint` - Path below the API base, e.g. `folder/idbypath.json`
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    /// JSON response body, or `Value::Null` for an empty success body
    pub async fn request(&self, method: Method, endpoint: &str, body: Option<Value>) -> Result<Value> {
        // Endpoints may embed the session id after ".json"; never log that part.
        let action = endpoint
            .split_once(".json")
            .map(|(action, _)| action)
            .unwrap_or(endpoint);
        debug!(%method, action, "api request");

        let response = self
            .transport
            .send(method, &self.url(endpoint), body.as_ref())
            .await?;

        debug!(
            %method,
            action,
            status = response.status,
            bytes = response.body.len(),
            "api response"
        );

        let result = parse_envelope(&response);
        if let Err(OpenDriveError::ApiError { code, message }) = &result {
            if ApiErrorCode::from(*code).is_session_error() {
                warn!(action, code, %message, "session rejected by server");
            }
        }
        result
    }

    pub async fn post(&self, endpoint: &str, body: Value) -> Result<Value> {
        self.request(Method::Post, endpoint, Some(body)).await
    }

    pub async fn get(&self, endpoint: &str) -> Result<Value> {
        self.request(Method::Get, endpoint, None).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Value> {
        self.request(Method::Delete, endpoint, None).await
    }

    /// POST and decode the payload into `R`.
    pub async fn post_as<R: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<R> {
        decode(self.post(endpoint, body).await?)
    }

    /// GET and decode the payload into `R`.
    pub async fn get_as<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R> {
        decode(self.get(endpoint).await?)
    }
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<R> {
    serde_json::from_value(value).map_err(|e| OpenDriveError::InvalidResponse(e.to_string()))
}

/// Turn a raw response into a payload or a typed failure.
///
/// An `error` object in the body wins over the HTTP status: OpenDrive reports
/// failures in-band, sometimes with a 200.
pub(crate) fn parse_envelope(response: &HttpResponse) -> Result<Value> {
    let body = response.body.trim();
    if body.is_empty() {
        return if response.is_success() {
            Ok(Value::Null)
        } else {
            Err(OpenDriveError::HttpError(response.status))
        };
    }

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !response.is_success() => {
            return Err(OpenDriveError::HttpError(response.status));
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
        return Err(api_error(error, response.status));
    }

    if !response.is_success() {
        return Err(OpenDriveError::HttpError(response.status));
    }

    Ok(value)
}

fn api_error(error: &Value, status: u16) -> OpenDriveError {
    if let Some(message) = error.as_str() {
        return OpenDriveError::api(i64::from(status), Some(message.to_string()));
    }

    let code = error
        .get("code")
        .and_then(|c| {
            c.as_i64()
                .or_else(|| c.as_str().and_then(|s| s.trim().parse().ok()))
        })
        .unwrap_or(i64::from(status));
    let message = error
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string);

    OpenDriveError::api(code, message)
}
