//! Identifiers and entry descriptors.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::api::types::{FileEntry, FolderEntry};

/// Provider-assigned identifier of a file or folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Identifier of the account root folder.
    pub const ROOT: &'static str = "0";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// OpenDrive sends ids as strings, but numeric ids show up for the root.
impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match Value::deserialize(d)? {
            Value::String(s) => Ok(NodeId(s)),
            Value::Number(n) => Ok(NodeId(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number id, got {}",
                other
            ))),
        }
    }
}

/// Entry type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Directory,
}

/// Normalized description of a file or directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDescriptor {
    /// Path relative to the account root, without leading slash.
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Last modification time (Unix epoch seconds).
    pub timestamp: i64,
    /// File extension as reported by OpenDrive. Always `None` for directories.
    pub mimetype: Option<String>,
    /// Size in bytes. Always `None` for directories.
    pub size: Option<u64>,
    /// Provider identifier of the entry.
    pub id: NodeId,
}

impl EntryDescriptor {
    pub fn from_file(path: impl Into<String>, file: &FileEntry) -> Self {
        Self {
            path: path.into(),
            entry_type: EntryType::File,
            timestamp: file.date_modified,
            mimetype: file.extension.clone().filter(|ext| !ext.is_empty()),
            size: Some(file.size),
            id: file.file_id.clone(),
        }
    }

    pub fn from_folder(path: impl Into<String>, folder: &FolderEntry) -> Self {
        Self {
            path: path.into(),
            entry_type: EntryType::Directory,
            timestamp: folder.date_modified,
            mimetype: None,
            size: None,
            id: folder.folder_id.clone(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}

/// What kind of item sits in the trash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrashKind {
    File,
    Folder,
}

/// An item moved to trash but not yet permanently removed.
///
/// Returned by `trash_file`/`trash_folder`; pass it to `purge` to finish the
/// deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashedItem {
    pub id: NodeId,
    pub kind: TrashKind,
}
