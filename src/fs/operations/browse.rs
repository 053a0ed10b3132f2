//! Folder listing and info lookups.

use crate::api::types::{FileEntry, FolderEntry, FolderListing};
use crate::client::OpenDriveClient;
use crate::error::Result;
use crate::fs::node::NodeId;
use crate::http::Transport;

impl<T: Transport> OpenDriveClient<T> {
    /// List the direct children of a folder.
    ///
    /// # Arguments
    /// * `folder_id` - Folder identifier, [`NodeId::root`] for the account root
    pub async fn list_folder(&self, folder_id: &NodeId) -> Result<FolderListing> {
        self.api()
            .get_as(&format!(
                "folder/list.json/{}/{}",
                self.session_id(),
                folder_id
            ))
            .await
    }

    /// Fetch name, size, extension and modification time of a file.
    pub async fn file_info(&self, file_id: &NodeId) -> Result<FileEntry> {
        self.api()
            .get_as(&format!(
                "file/info.json/{}?session_id={}",
                file_id,
                self.session_id()
            ))
            .await
    }

    /// Fetch name and modification time of a folder.
    pub async fn folder_info(&self, folder_id: &NodeId) -> Result<FolderEntry> {
        self.api()
            .get_as(&format!(
                "folder/info.json/{}/{}",
                self.session_id(),
                folder_id
            ))
            .await
    }
}
