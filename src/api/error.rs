//! OpenDrive API error codes.

/// Error codes OpenDrive reports in the `error.code` field.
///
/// The provider reuses HTTP status numbers for its in-band errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Malformed request or invalid arguments
    BadRequest = 400,
    /// Session missing or expired
    Unauthorized = 401,
    /// Account over quota or plan limit
    PaymentRequired = 402,
    /// Access denied
    Forbidden = 403,
    /// Resource does not exist
    NotFound = 404,
    /// Method not allowed on this resource
    MethodNotAllowed = 405,
    /// Resource already exists
    Conflict = 409,
    /// Too many requests
    TooManyRequests = 429,
    /// Internal server error
    Internal = 500,
    /// Temporarily unavailable
    Unavailable = 503,
    /// Unknown error
    Unknown = -1,
}

impl From<i64> for ApiErrorCode {
    fn from(code: i64) -> Self {
        match code {
            400 => ApiErrorCode::BadRequest,
            401 => ApiErrorCode::Unauthorized,
            402 => ApiErrorCode::PaymentRequired,
            403 => ApiErrorCode::Forbidden,
            404 => ApiErrorCode::NotFound,
            405 => ApiErrorCode::MethodNotAllowed,
            409 => ApiErrorCode::Conflict,
            429 => ApiErrorCode::TooManyRequests,
            500 => ApiErrorCode::Internal,
            503 => ApiErrorCode::Unavailable,
            _ => ApiErrorCode::Unknown,
        }
    }
}

impl ApiErrorCode {
    /// Get human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ApiErrorCode::BadRequest => "Bad request",
            ApiErrorCode::Unauthorized => "Unauthorized",
            ApiErrorCode::PaymentRequired => "Payment required",
            ApiErrorCode::Forbidden => "Access denied",
            ApiErrorCode::NotFound => "Not found",
            ApiErrorCode::MethodNotAllowed => "Method not allowed",
            ApiErrorCode::Conflict => "Resource already exists",
            ApiErrorCode::TooManyRequests => "Too many requests",
            ApiErrorCode::Internal => "Internal error",
            ApiErrorCode::Unavailable => "Temporarily unavailable",
            ApiErrorCode::Unknown => "Unknown error",
        }
    }

    /// Session-level failures that make every later call fail too.
    pub fn is_session_error(&self) -> bool {
        matches!(self, ApiErrorCode::Unauthorized)
    }
}
