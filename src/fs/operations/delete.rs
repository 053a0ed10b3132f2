//! Two-phase deletion: move to trash, then purge.
//!
//! A failure between the two steps leaves the item in the trash. That state
//! is surfaced as [`OpenDriveError::PurgeFailed`] so the caller can retry
//! just the purge.

use serde_json::json;
use tracing::{info, warn};

use crate::client::OpenDriveClient;
use crate::error::{OpenDriveError, Result};
use crate::fs::node::{NodeId, TrashKind, TrashedItem};
use crate::http::Transport;

impl<T: Transport> OpenDriveClient<T> {
    /// Move a file to the trash.
    pub async fn trash_file(&self, file_id: &NodeId) -> Result<TrashedItem> {
        self.api()
            .post(
                "file/trash.json",
                json!({
                    "session_id": self.session_id(),
                    "file_id": file_id,
                }),
            )
            .await?;

        Ok(TrashedItem {
            id: file_id.clone(),
            kind: TrashKind::File,
        })
    }

    /// Move a folder to the trash.
    pub async fn trash_folder(&self, folder_id: &NodeId) -> Result<TrashedItem> {
        if folder_id.is_root() {
            return Err(OpenDriveError::InvalidPath(
                "cannot delete the root folder".to_string(),
            ));
        }

        self.api()
            .post(
                "folder/trash.json",
                json!({
                    "session_id": self.session_id(),
                    "folder_id": folder_id,
                }),
            )
            .await?;

        Ok(TrashedItem {
            id: folder_id.clone(),
            kind: TrashKind::Folder,
        })
    }

    /// Permanently remove a trashed item.
    pub async fn purge(&self, item: &TrashedItem) -> Result<()> {
        match item.kind {
            TrashKind::File => {
                self.api()
                    .delete(&format!("file.json/{}/{}", self.session_id(), item.id))
                    .await?;
            }
            TrashKind::Folder => {
                self.api()
                    .post(
                        "folder/remove.json",
                        json!({
                            "session_id": self.session_id(),
                            "folder_id": &item.id,
                        }),
                    )
                    .await?;
            }
        }
        Ok(())
    }

    /// Delete a file: trash it, then purge it.
    ///
    /// If trashing fails, nothing else is sent.
    pub async fn delete_file(&self, file_id: &NodeId) -> Result<()> {
        let item = self.trash_file(file_id).await?;
        self.finish_delete(item).await
    }

    /// Delete a folder and its contents: trash it, then purge it.
    pub async fn delete_folder(&self, folder_id: &NodeId) -> Result<()> {
        let item = self.trash_folder(folder_id).await?;
        self.finish_delete(item).await
    }

    async fn finish_delete(&self, item: TrashedItem) -> Result<()> {
        match self.purge(&item).await {
            Ok(()) => {
                info!(id = %item.id, kind = ?item.kind, "deleted");
                Ok(())
            }
            Err(e) => {
                warn!(id = %item.id, kind = ?item.kind, error = %e, "purge failed, item left in trash");
                Err(OpenDriveError::PurgeFailed {
                    item,
                    source: Box::new(e),
                })
            }
        }
    }
}
