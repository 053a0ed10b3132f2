//! Path to identifier resolution.

use serde_json::json;

use super::utils::normalize_path;
use crate::api::ApiErrorCode;
use crate::api::types::{FileIdResponse, FolderIdResponse};
use crate::client::OpenDriveClient;
use crate::error::{OpenDriveError, Result};
use crate::fs::node::NodeId;
use crate::http::Transport;

impl<T: Transport> OpenDriveClient<T> {
    /// Look up the identifier of the folder at `path`.
    ///
    /// The root (`""` or `"/"`) maps to [`NodeId::root`] without a request.
    /// Every other call queries the server; results are not cached.
    ///
    /// # Errors
    /// [`OpenDriveError::NotFound`] if no folder exists at `path`.
    pub async fn resolve_folder_id(&self, path: &str) -> Result<NodeId> {
        let path = normalize_path(path);
        if path.is_empty() {
            return Ok(NodeId::root());
        }

        let response: FolderIdResponse = self
            .api()
            .post_as(
                "folder/idbypath.json",
                json!({
                    "session_id": self.session_id(),
                    "path": &path,
                }),
            )
            .await
            .map_err(|e| not_found(e, &path))?;

        Ok(response.folder_id)
    }

    /// Look up the identifier of the file at `path`.
    ///
    /// # Errors
    /// [`OpenDriveError::NotFound`] if no file exists at `path`.
    pub async fn resolve_file_id(&self, path: &str) -> Result<NodeId> {
        let path = normalize_path(path);
        if path.is_empty() {
            return Err(OpenDriveError::InvalidPath(
                "the root is not a file".to_string(),
            ));
        }

        let response: FileIdResponse = self
            .api()
            .post_as(
                "file/idbypath.json",
                json!({
                    "session_id": self.session_id(),
                    "path": &path,
                }),
            )
            .await
            .map_err(|e| not_found(e, &path))?;

        Ok(response.file_id)
    }
}

fn not_found(err: OpenDriveError, path: &str) -> OpenDriveError {
    match err {
        OpenDriveError::ApiError { code, .. } if ApiErrorCode::from(code) == ApiErrorCode::NotFound => {
            OpenDriveError::NotFound {
                path: path.to_string(),
            }
        }
        other => other,
    }
}
