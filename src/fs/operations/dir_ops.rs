//! Folder creation and file move/copy/rename.

use serde_json::json;
use tracing::info;

use crate::api::types::FolderEntry;
use crate::client::OpenDriveClient;
use crate::error::{OpenDriveError, Result};
use crate::fs::node::NodeId;
use crate::http::Transport;

/// Optional settings for a new folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderOptions {
    /// Make the folder publicly visible.
    pub public: bool,
    /// Free-text folder description.
    pub description: String,
}

impl<T: Transport> OpenDriveClient<T> {
    /// Create a folder named `name` inside `parent_id`.
    pub async fn create_folder(&self, name: &str, parent_id: &NodeId) -> Result<FolderEntry> {
        self.create_folder_with(name, parent_id, &FolderOptions::default())
            .await
    }

    /// Create a folder with explicit [`FolderOptions`].
    pub async fn create_folder_with(
        &self,
        name: &str,
        parent_id: &NodeId,
        options: &FolderOptions,
    ) -> Result<FolderEntry> {
        if name.is_empty() || name.contains('/') {
            return Err(OpenDriveError::InvalidPath(format!(
                "invalid folder name: {:?}",
                name
            )));
        }

        let folder: FolderEntry = self
            .api()
            .post_as(
                "folder.json",
                json!({
                    "session_id": self.session_id(),
                    "folder_name": name,
                    "folder_sub_parent": parent_id,
                    "folder_is_public": u8::from(options.public),
                    "folder_public_upl": 0,
                    "folder_public_display": 0,
                    "folder_public_dnl": 0,
                    "folder_description": &options.description,
                }),
            )
            .await?;

        info!(id = %folder.folder_id, parent = %parent_id, "folder created");
        Ok(folder)
    }

    /// Move or copy a file into another folder, possibly under a new name.
    ///
    /// # Arguments
    /// * `file_id` - File to move or copy
    /// * `dst_folder_id` - Destination folder
    /// * `new_name` - Name of the file in the destination
    /// * `is_move` - `true` to move, `false` to copy
    /// * `overwrite` - Replace an existing file with the same name
    pub async fn move_or_copy(
        &self,
        file_id: &NodeId,
        dst_folder_id: &NodeId,
        new_name: &str,
        is_move: bool,
        overwrite: bool,
    ) -> Result<()> {
        self.api()
            .post(
                "file/move_copy.json",
                json!({
                    "session_id": self.session_id(),
                    "src_file_id": file_id,
                    "dst_folder_id": dst_folder_id,
                    "move": is_move.to_string(),
                    "overwrite_if_exists": overwrite.to_string(),
                    "new_file_name": new_name,
                }),
            )
            .await?;

        let op = if is_move { "move" } else { "copy" };
        info!(id = %file_id, dst = %dst_folder_id, op, "file transferred");
        Ok(())
    }

    /// Rename a file in place.
    pub async fn rename_file(&self, file_id: &NodeId, new_name: &str) -> Result<()> {
        self.api()
            .post(
                "file/rename.json",
                json!({
                    "session_id": self.session_id(),
                    "file_id": file_id,
                    "new_file_name": new_name,
                }),
            )
            .await?;

        info!(id = %file_id, new_name, "file renamed");
        Ok(())
    }
}
