//! Error types for the opendrive-fs library.

use thiserror::Error;

use crate::api::ApiErrorCode;
use crate::fs::TrashedItem;

/// Main error type for opendrive-fs operations.
#[derive(Error, Debug)]
pub enum OpenDriveError {
    /// HTTP request failed with status code and no usable body.
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network request error.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Response was valid JSON but did not have the expected shape.
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// OpenDrive returned an `error` object in the response body.
    #[error("API error: {code} - {message}")]
    ApiError { code: i64, message: String },

    /// Login failed. The client is unusable.
    #[error("Authentication failed: {0}")]
    AuthError(#[source] Box<OpenDriveError>),

    /// Path lookup found nothing.
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// The item was moved to trash but the permanent removal failed.
    ///
    /// Retry with [`OpenDriveClient::purge`](crate::OpenDriveClient::purge).
    #[error("Item {} was trashed but could not be purged: {source}", .item.id)]
    PurgeFailed {
        item: TrashedItem,
        #[source]
        source: Box<OpenDriveError>,
    },

    /// The operation has no implementation for this provider.
    #[error("Operation not implemented: {0}")]
    NotImplemented(&'static str),

    /// The provider cannot support the operation.
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),

    /// Path cannot be used for the requested operation.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Client configuration could not be applied.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl OpenDriveError {
    /// Build an API error, falling back to the code description when the
    /// provider sent no message.
    pub fn api(code: i64, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| ApiErrorCode::from(code).description().to_string());
        OpenDriveError::ApiError { code, message }
    }

    /// Check whether this error means the path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, OpenDriveError::NotFound { .. })
    }

    /// Provider error code, if this is an in-band API error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            OpenDriveError::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias for opendrive-fs operations.
pub type Result<T> = std::result::Result<T, OpenDriveError>;
