//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::api::ApiClient;
use crate::error::{OpenDriveError, Result};
use crate::http::{HttpResponse, Method, Transport};
use crate::session::Session;
use crate::OpenDriveClient;

pub(crate) const TEST_API_URL: &str = "https://api.test/v1";
pub(crate) const TEST_SESSION: &str = "sid-123";

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl RecordedRequest {
    /// URL relative to the API base.
    pub fn endpoint(&self) -> &str {
        self.url
            .strip_prefix(TEST_API_URL)
            .map(|s| s.trim_start_matches('/'))
            .unwrap_or(&self.url)
    }

    /// String value of a body field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.body.as_ref()?.get(name)?.as_str()
    }
}

/// Replays queued responses in order and records every request.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockTransport {
    responses: Arc<Mutex<VecDeque<HttpResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with a JSON body.
    pub fn respond(self, body: Value) -> Self {
        self.respond_raw(200, &body.to_string())
    }

    /// Queue a response with an arbitrary status and body.
    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            body: body.to_string(),
        });
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn endpoints(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.endpoint().to_string())
            .collect()
    }

    /// Client with an established session that sends through this mock.
    pub fn client(&self) -> OpenDriveClient<MockTransport> {
        OpenDriveClient::with_session(
            ApiClient::with_transport(self.clone(), TEST_API_URL),
            Session::new(TEST_SESSION, "tester"),
        )
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            body: body.cloned(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| {
                OpenDriveError::InvalidResponse(format!("no scripted response for {}", url))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exhausted_script_is_invalid_response() {
        let mock = MockTransport::new();
        let err = mock
            .send(Method::Get, "https://api.test/v1/folder/list.json", None)
            .await
            .unwrap_err();
        assert!(matches!(err, OpenDriveError::InvalidResponse(_)));
        assert_eq!(mock.endpoints(), vec!["folder/list.json"]);
    }
}
