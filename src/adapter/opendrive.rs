//! [`FilesystemAdapter`] backed by an [`OpenDriveClient`].

use async_trait::async_trait;
use futures::future::BoxFuture;

use super::{Capabilities, Config, FilesystemAdapter};
use crate::client::OpenDriveClient;
use crate::error::{OpenDriveError, Result};
use crate::fs::operations::utils::{join_path, normalize_path, split_path};
use crate::fs::{EntryDescriptor, FolderOptions, NodeId};
use crate::http::{HttpClient, Transport};

/// Maps filesystem operations onto OpenDrive API calls.
///
/// Every call resolves paths afresh; nothing is cached.
///
/// # Example
/// ```no_run
/// use opendrive_fs::{FilesystemAdapter, OpenDriveAdapter, OpenDriveClient};
///
/// # async fn example() -> opendrive_fs::Result<()> {
/// let client = OpenDriveClient::login("user@example.com", "password").await?;
/// let adapter = OpenDriveAdapter::new(client);
/// for entry in adapter.list_contents("", true).await? {
///     println!("{:?} {}", entry.entry_type, entry.path);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct OpenDriveAdapter<T = HttpClient> {
    client: OpenDriveClient<T>,
}

impl<T: Transport> OpenDriveAdapter<T> {
    pub fn new(client: OpenDriveClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &OpenDriveClient<T> {
        &self.client
    }

    pub fn into_client(self) -> OpenDriveClient<T> {
        self.client
    }

    /// Resolve the folder that will contain `path`, and the leaf name.
    async fn resolve_parent(&self, path: &str) -> Result<(NodeId, String)> {
        let path = normalize_path(path);
        if path.is_empty() {
            return Err(OpenDriveError::InvalidPath(
                "path must name an entry below the root".to_string(),
            ));
        }

        let (parent, name) = split_path(&path);
        let parent_id = match parent {
            Some(parent) => self.client.resolve_folder_id(parent).await?,
            None => NodeId::root(),
        };
        Ok((parent_id, name.to_string()))
    }

    async fn transfer(&self, path: &str, new_path: &str, is_move: bool) -> Result<()> {
        let file_id = self.client.resolve_file_id(path).await?;
        let (folder_id, new_name) = self.resolve_parent(new_path).await?;
        self.client
            .move_or_copy(&file_id, &folder_id, &new_name, is_move, true)
            .await
    }

    /// List `folder_id`, naming children below `directory`.
    ///
    /// Recursion descends by each child folder's own path and id.
    fn collect_entries(
        &self,
        directory: String,
        folder_id: NodeId,
        recursive: bool,
    ) -> BoxFuture<'_, Result<Vec<EntryDescriptor>>> {
        Box::pin(async move {
            let listing = self.client.list_folder(&folder_id).await?;
            let mut results = Vec::with_capacity(listing.files.len() + listing.folders.len());

            for file in &listing.files {
                let path = join_path(&directory, &file.name);
                results.push(EntryDescriptor::from_file(path, file));
            }

            for folder in &listing.folders {
                let path = join_path(&directory, &folder.name);
                results.push(EntryDescriptor::from_folder(path.clone(), folder));

                if recursive {
                    let children = self
                        .collect_entries(path, folder.folder_id.clone(), true)
                        .await?;
                    results.extend(children);
                }
            }

            Ok(results)
        })
    }
}

#[async_trait]
impl<T: Transport> FilesystemAdapter for OpenDriveAdapter<T> {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            read: false,
            write: false,
            metadata: true,
            visibility: false,
            streams: false,
        }
    }

    async fn write(&self, _path: &str, _contents: &[u8], _config: &Config) -> Result<EntryDescriptor> {
        Err(OpenDriveError::NotImplemented("write"))
    }

    async fn update(
        &self,
        _path: &str,
        _contents: &[u8],
        _config: &Config,
    ) -> Result<EntryDescriptor> {
        Err(OpenDriveError::NotImplemented("update"))
    }

    async fn read(&self, _path: &str) -> Result<Vec<u8>> {
        Err(OpenDriveError::NotImplemented("read"))
    }

    async fn rename(&self, path: &str, new_path: &str) -> Result<()> {
        self.transfer(path, new_path, true).await
    }

    async fn copy(&self, path: &str, new_path: &str) -> Result<()> {
        self.transfer(path, new_path, false).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let file_id = self.client.resolve_file_id(path).await?;
        self.client.delete_file(&file_id).await
    }

    async fn delete_dir(&self, path: &str) -> Result<()> {
        let folder_id = self.client.resolve_folder_id(path).await?;
        self.client.delete_folder(&folder_id).await
    }

    async fn create_dir(&self, path: &str, config: &Config) -> Result<EntryDescriptor> {
        let (parent_id, name) = self.resolve_parent(path).await?;
        let options = FolderOptions {
            public: config.get_bool("public").unwrap_or(false),
            description: config.get_str("description").unwrap_or_default().to_string(),
        };

        let folder = self
            .client
            .create_folder_with(&name, &parent_id, &options)
            .await?;
        Ok(EntryDescriptor::from_folder(normalize_path(path), &folder))
    }

    async fn has(&self, path: &str) -> Result<bool> {
        // The root is a folder, never a file.
        if normalize_path(path).is_empty() {
            return Ok(false);
        }

        match self.client.resolve_file_id(path).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn list_contents(
        &self,
        directory: &str,
        recursive: bool,
    ) -> Result<Vec<EntryDescriptor>> {
        let directory = normalize_path(directory);
        let folder_id = if directory.is_empty() {
            NodeId::root()
        } else {
            self.client.resolve_folder_id(&directory).await?
        };

        self.collect_entries(directory, folder_id, recursive).await
    }

    async fn get_metadata(&self, path: &str) -> Result<EntryDescriptor> {
        let path = normalize_path(path);

        if !path.is_empty() {
            match self.client.resolve_file_id(&path).await {
                Ok(file_id) => {
                    let file = self.client.file_info(&file_id).await?;
                    return Ok(EntryDescriptor::from_file(path, &file));
                }
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }

        let folder_id = self.client.resolve_folder_id(&path).await?;
        let folder = self.client.folder_info(&folder_id).await?;
        Ok(EntryDescriptor::from_folder(path, &folder))
    }

    async fn get_size(&self, path: &str) -> Result<u64> {
        self.get_metadata(path)
            .await?
            .size
            .ok_or(OpenDriveError::Unsupported("size of a directory"))
    }

    async fn get_mimetype(&self, path: &str) -> Result<Option<String>> {
        let entry = self.get_metadata(path).await?;
        if entry.is_dir() {
            return Err(OpenDriveError::Unsupported("mimetype of a directory"));
        }
        Ok(entry.mimetype)
    }

    async fn get_timestamp(&self, path: &str) -> Result<i64> {
        Ok(self.get_metadata(path).await?.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::Visibility;
    use crate::fs::EntryType;
    use crate::mock::MockTransport;
    use serde_json::{Value, json};

    fn adapter(mock: &MockTransport) -> OpenDriveAdapter<MockTransport> {
        OpenDriveAdapter::new(mock.client())
    }

    fn file(id: &str, name: &str, size: u64, modified: i64, ext: &str) -> Value {
        json!({
            "FileId": id,
            "Name": name,
            "Size": size.to_string(),
            "DateModified": modified.to_string(),
            "Extension": ext
        })
    }

    fn folder(id: &str, name: &str, modified: i64) -> Value {
        json!({"FolderID": id, "Name": name, "DateModified": modified})
    }

    #[tokio::test]
    async fn test_list_empty_root() {
        let mock = MockTransport::new().respond(json!({"Files": [], "Folders": []}));
        let entries = adapter(&mock).list_contents("", false).await.unwrap();

        assert!(entries.is_empty());
        assert_eq!(mock.endpoints(), vec!["folder/list.json/sid-123/0"]);
    }

    #[tokio::test]
    async fn test_list_root_files_and_folders() {
        let mock = MockTransport::new().respond(json!({
            "Files": [file("F1", "a.txt", 10, 1000, "txt")],
            "Folders": [folder("D1", "sub", 2000)]
        }));
        let entries = adapter(&mock).list_contents("/", false).await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "a.txt");
        assert_eq!(entries[0].entry_type, EntryType::File);
        assert_eq!(entries[0].timestamp, 1000);
        assert_eq!(entries[0].mimetype.as_deref(), Some("txt"));
        assert_eq!(entries[0].size, Some(10));

        assert_eq!(entries[1].path, "sub");
        assert_eq!(entries[1].entry_type, EntryType::Directory);
        assert_eq!(entries[1].timestamp, 2000);
        assert!(entries[1].mimetype.is_none());
        assert!(entries[1].size.is_none());

        // Root needs no id lookup.
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_list_recursive_descends_by_child_path() {
        let mock = MockTransport::new()
            .respond(json!({
                "Files": [file("F1", "a.txt", 10, 1000, "txt")],
                "Folders": [folder("D1", "sub", 2000)]
            }))
            .respond(json!({
                "Files": [file("F2", "b.txt", 4, 3000, "txt")],
                "Folders": [folder("D2", "deeper", 4000)]
            }))
            .respond(json!({
                "Files": [file("F3", "c.md", 1, 5000, "md")]
            }));
        let entries = adapter(&mock).list_contents("", true).await.unwrap();

        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["a.txt", "sub", "sub/b.txt", "sub/deeper", "sub/deeper/c.md"]
        );
        assert_eq!(entries[2].entry_type, EntryType::File);
        assert_eq!(entries[2].size, Some(4));
        assert_eq!(
            mock.endpoints(),
            vec![
                "folder/list.json/sid-123/0",
                "folder/list.json/sid-123/D1",
                "folder/list.json/sid-123/D2"
            ]
        );
    }

    #[tokio::test]
    async fn test_list_non_recursive_skips_children() {
        let mock = MockTransport::new().respond(json!({
            "Files": [file("F1", "a.txt", 10, 1000, "txt")],
            "Folders": [folder("D1", "sub", 2000)]
        }));
        let entries = adapter(&mock).list_contents("", false).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_list_subdirectory_prefixes_paths() {
        let mock = MockTransport::new()
            .respond(json!({"FolderId": "D9"}))
            .respond(json!({
                "Files": [file("F1", "x.pdf", 1, 1, "pdf")],
                "Folders": null
            }));
        let entries = adapter(&mock).list_contents("/docs/", false).await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "docs/x.pdf");
        let requests = mock.requests();
        assert_eq!(requests[0].field("path"), Some("docs"));
        assert_eq!(requests[1].endpoint(), "folder/list.json/sid-123/D9");
    }

    #[tokio::test]
    async fn test_create_dir_nested() {
        let mock = MockTransport::new()
            .respond(json!({"FolderId": "A1"}))
            .respond(json!({"FolderID": "B1", "Name": "b", "DateModified": "60"}));
        let entry = adapter(&mock)
            .create_dir("a/b", &Config::new())
            .await
            .unwrap();

        assert_eq!(entry.path, "a/b");
        assert_eq!(entry.entry_type, EntryType::Directory);
        assert_eq!(entry.timestamp, 60);
        assert!(entry.mimetype.is_none());
        assert!(entry.size.is_none());

        let requests = mock.requests();
        assert_eq!(requests[0].endpoint(), "folder/idbypath.json");
        assert_eq!(requests[0].field("path"), Some("a"));
        assert_eq!(requests[1].endpoint(), "folder.json");
        assert_eq!(requests[1].field("folder_name"), Some("b"));
        assert_eq!(requests[1].field("folder_sub_parent"), Some("A1"));
    }

    #[tokio::test]
    async fn test_create_dir_top_level_uses_root() {
        let mock = MockTransport::new().respond(json!({"FolderID": "T1", "Name": "top"}));
        let config = Config::new()
            .with("public", true)
            .with("description", "team share");
        let entry = adapter(&mock).create_dir("top", &config).await.unwrap();

        assert_eq!(entry.path, "top");
        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].field("folder_sub_parent"), Some("0"));
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["folder_is_public"], 1);
        assert_eq!(body["folder_description"], "team share");
    }

    #[tokio::test]
    async fn test_create_dir_rejects_root() {
        let mock = MockTransport::new();
        let err = adapter(&mock)
            .create_dir("/", &Config::new())
            .await
            .unwrap_err();
        assert!(matches!(err, OpenDriveError::InvalidPath(_)));
    }

    #[tokio::test]
    async fn test_rename_moves_with_overwrite() {
        let mock = MockTransport::new()
            .respond(json!({"FileId": "X1"}))
            .respond(json!({"FolderId": "C1"}))
            .respond(json!({"FileId": "X1"}));
        adapter(&mock).rename("a/x.txt", "c/y.txt").await.unwrap();

        let requests = mock.requests();
        assert_eq!(
            mock.endpoints(),
            vec!["file/idbypath.json", "folder/idbypath.json", "file/move_copy.json"]
        );
        assert_eq!(requests[0].field("path"), Some("a/x.txt"));
        assert_eq!(requests[1].field("path"), Some("c"));
        assert_eq!(requests[2].field("src_file_id"), Some("X1"));
        assert_eq!(requests[2].field("dst_folder_id"), Some("C1"));
        assert_eq!(requests[2].field("new_file_name"), Some("y.txt"));
        assert_eq!(requests[2].field("move"), Some("true"));
        assert_eq!(requests[2].field("overwrite_if_exists"), Some("true"));
    }

    #[tokio::test]
    async fn test_copy_to_root() {
        let mock = MockTransport::new()
            .respond(json!({"FileId": "X1"}))
            .respond(json!({"FileId": "X2"}));
        adapter(&mock).copy("a/x.txt", "x-copy.txt").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].field("dst_folder_id"), Some("0"));
        assert_eq!(requests[1].field("new_file_name"), Some("x-copy.txt"));
        assert_eq!(requests[1].field("move"), Some("false"));
        assert_eq!(requests[1].field("overwrite_if_exists"), Some("true"));
    }

    #[tokio::test]
    async fn test_rename_missing_source_stops_early() {
        let mock = MockTransport::new().respond(json!({
            "error": {"code": 404, "message": "File not found"}
        }));
        let err = adapter(&mock).rename("nope.txt", "c/y.txt").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_file() {
        let mock = MockTransport::new()
            .respond(json!({"FileId": "F1"}))
            .respond(json!({}))
            .respond_raw(200, "");
        adapter(&mock).delete("a/x.txt").await.unwrap();

        assert_eq!(
            mock.endpoints(),
            vec!["file/idbypath.json", "file/trash.json", "file.json/sid-123/F1"]
        );
    }

    #[tokio::test]
    async fn test_delete_dir() {
        let mock = MockTransport::new()
            .respond(json!({"FolderId": "D1"}))
            .respond(json!({}))
            .respond(json!({}));
        adapter(&mock).delete_dir("a/sub").await.unwrap();

        assert_eq!(
            mock.endpoints(),
            vec!["folder/idbypath.json", "folder/trash.json", "folder/remove.json"]
        );
    }

    #[tokio::test]
    async fn test_has() {
        let mock = MockTransport::new()
            .respond(json!({"FileId": "F1"}))
            .respond(json!({"error": {"code": 404, "message": "File not found"}}))
            .respond(json!({"error": {"code": 401, "message": "Session expired"}}));
        let adapter = adapter(&mock);

        assert!(adapter.has("a.txt").await.unwrap());
        assert!(!adapter.has("missing.txt").await.unwrap());
        let err = adapter.has("a.txt").await.unwrap_err();
        assert_eq!(err.api_code(), Some(401));
    }

    #[tokio::test]
    async fn test_has_root_is_false() {
        let mock = MockTransport::new();
        let adapter = adapter(&mock);

        assert!(!adapter.has("").await.unwrap());
        assert!(!adapter.has("/").await.unwrap());
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_content_operations_not_implemented() {
        let mock = MockTransport::new();
        let adapter = adapter(&mock);
        let config = Config::new();

        assert!(matches!(
            adapter.read("a.txt").await,
            Err(OpenDriveError::NotImplemented("read"))
        ));
        assert!(matches!(
            adapter.write("a.txt", b"hi", &config).await,
            Err(OpenDriveError::NotImplemented("write"))
        ));
        assert!(matches!(
            adapter.update("a.txt", b"hi", &config).await,
            Err(OpenDriveError::NotImplemented("update"))
        ));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_visibility_unsupported() {
        let mock = MockTransport::new();
        let adapter = adapter(&mock);

        let caps = adapter.capabilities();
        assert!(!caps.visibility && !caps.streams && !caps.read && !caps.write);
        assert!(caps.metadata);
        assert!(matches!(
            adapter.set_visibility("a.txt", Visibility::Public).await,
            Err(OpenDriveError::Unsupported(_))
        ));
        assert!(matches!(
            adapter.get_visibility("a.txt").await,
            Err(OpenDriveError::Unsupported(_))
        ));
    }

    #[tokio::test]
    async fn test_file_metadata() {
        let mock = MockTransport::new()
            .respond(json!({"FileId": "F1"}))
            .respond(file("F1", "a.txt", 10, 1000, "txt"))
            .respond(json!({"FileId": "F1"}))
            .respond(file("F1", "a.txt", 10, 1000, "txt"))
            .respond(json!({"FileId": "F1"}))
            .respond(file("F1", "a.txt", 10, 1000, "txt"));
        let adapter = adapter(&mock);

        let entry = adapter.get_metadata("/a.txt").await.unwrap();
        assert_eq!(entry.path, "a.txt");
        assert!(entry.is_file());
        assert_eq!(adapter.get_size("a.txt").await.unwrap(), 10);
        assert_eq!(
            adapter.get_mimetype("a.txt").await.unwrap().as_deref(),
            Some("txt")
        );
        assert_eq!(mock.endpoints()[1], "file/info.json/F1?session_id=sid-123");
    }

    #[tokio::test]
    async fn test_directory_metadata_falls_back_to_folder() {
        let mock = MockTransport::new()
            .respond(json!({"error": {"code": 404, "message": "File not found"}}))
            .respond(json!({"FolderId": "D1"}))
            .respond(folder("D1", "sub", 2000))
            .respond(json!({"error": {"code": 404, "message": "File not found"}}))
            .respond(json!({"FolderId": "D1"}))
            .respond(folder("D1", "sub", 2000));
        let adapter = adapter(&mock);

        assert_eq!(adapter.get_timestamp("sub").await.unwrap(), 2000);
        let err = adapter.get_size("sub").await.unwrap_err();
        assert!(matches!(err, OpenDriveError::Unsupported(_)));
        assert_eq!(
            &mock.endpoints()[..3],
            &["file/idbypath.json", "folder/idbypath.json", "folder/info.json/sid-123/D1"]
        );
    }

    #[tokio::test]
    async fn test_root_metadata() {
        let mock = MockTransport::new().respond(folder("0", "My files", 10));
        let entry = adapter(&mock).get_metadata("").await.unwrap();
        assert!(entry.is_dir());
        assert!(entry.id.is_root());
        assert_eq!(mock.endpoints(), vec!["folder/info.json/sid-123/0"]);
    }
}
