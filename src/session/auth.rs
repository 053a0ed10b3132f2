//! Login: exchanging credentials for a [`Session`].

use serde_json::json;
use tracing::info;

use crate::api::ApiClient;
use crate::api::types::LoginResponse;
use crate::client::OpenDriveClient;
use crate::config::ClientConfig;
use crate::error::{OpenDriveError, Result};
use crate::http::{HttpClient, Transport};

use super::session::Session;

impl OpenDriveClient<HttpClient> {
    /// Login with username and password.
    ///
    /// This creates a new authenticated session with OpenDrive.
    ///
    /// # Example
    /// ```no_run
    /// use opendrive_fs::OpenDriveClient;
    ///
    /// # async fn example() -> opendrive_fs::Result<()> {
    /// let client = OpenDriveClient::login("user@example.com", "password").await?;
    /// println!("Logged in as: {}", client.session().username());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn login(username: &str, password: &str) -> Result<Self> {
        Self::login_with_config(username, password, &ClientConfig::default()).await
    }

    /// Login with username, password, and HTTP proxy.
    ///
    /// # Arguments
    /// * `username` - Account username
    /// * `password` - Account password
    /// * `proxy` - Proxy URL (e.g., "http://proxy:8080" or "socks5://proxy:1080")
    pub async fn login_with_proxy(username: &str, password: &str, proxy: &str) -> Result<Self> {
        let config = ClientConfig::default().with_proxy(proxy);
        Self::login_with_config(username, password, &config).await
    }

    /// Login using every setting in `config`.
    pub async fn login_with_config(
        username: &str,
        password: &str,
        config: &ClientConfig,
    ) -> Result<Self> {
        let api = ApiClient::from_config(config)
            .map_err(|e| OpenDriveError::AuthError(Box::new(e)))?;
        Self::authenticate(api, username, password, config).await
    }
}

impl<T: Transport> OpenDriveClient<T> {
    /// Exchange credentials for a session over an existing API client.
    ///
    /// Any failure is reported as [`OpenDriveError::AuthError`]; nothing is
    /// retried.
    pub async fn authenticate(
        api: ApiClient<T>,
        username: &str,
        password: &str,
        config: &ClientConfig,
    ) -> Result<Self> {
        let response: LoginResponse = api
            .post_as(
                "session/login.json",
                json!({
                    "username": username,
                    "passwd": password,
                    "version": &config.version,
                    "partner_id": &config.partner_id,
                }),
            )
            .await
            .map_err(|e| OpenDriveError::AuthError(Box::new(e)))?;

        if response.session_id.is_empty() {
            return Err(OpenDriveError::AuthError(Box::new(
                OpenDriveError::InvalidResponse("empty SessionID".to_string()),
            )));
        }

        let username = response.user_name.unwrap_or_else(|| username.to_string());
        info!(user = %username, "logged in");

        Ok(Self::with_session(
            api,
            Session::new(response.session_id, username),
        ))
    }
}
