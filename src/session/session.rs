//! Authenticated session handle.

use std::fmt;

/// Session obtained from `session/login.json`.
///
/// Each [`OpenDriveClient`](crate::OpenDriveClient) owns exactly one session,
/// set at construction and never changed. There is no refresh: once the
/// server expires it, every call fails with an API error.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
    username: String,
}

impl Session {
    /// Wrap an existing session id, e.g. one saved from an earlier login.
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }

    /// The raw session id sent with every request.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}
