//! The OpenDrive provider client.
//!
//! Operations are implemented in `fs::operations`, split by concern; login
//! lives in `session`.

use crate::api::ApiClient;
use crate::http::{HttpClient, Transport};
use crate::session::Session;

/// Authenticated OpenDrive client.
///
/// Owns one [`Session`] for its whole lifetime. Every operation is one or two
/// sequential round trips; nothing is cached between calls.
#[derive(Debug)]
pub struct OpenDriveClient<T = HttpClient> {
    api: ApiClient<T>,
    session: Session,
}

impl<T: Transport> OpenDriveClient<T> {
    /// Build a client around a session obtained elsewhere.
    pub fn with_session(api: ApiClient<T>, session: Session) -> Self {
        Self { api, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_id(&self) -> &str {
        self.session.id()
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }
}
