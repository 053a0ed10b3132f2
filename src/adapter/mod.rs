//! Generic filesystem adapter interface.
//!
//! [`FilesystemAdapter`] is the operation set a storage backend implements.
//! Backends that lack a feature say so through [`Capabilities`] and fail the
//! matching calls with [`OpenDriveError::NotImplemented`] or
//! [`OpenDriveError::Unsupported`].

mod opendrive;

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{OpenDriveError, Result};
use crate::fs::EntryDescriptor;

pub use opendrive::OpenDriveAdapter;

/// Write-time options, keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    settings: HashMap<String, Value>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Config::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.settings.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.settings.contains_key(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }
}

/// Public/private visibility of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// What an adapter actually supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// `read` returns file contents.
    pub read: bool,
    /// `write` and `update` store file contents.
    pub write: bool,
    /// `get_metadata`, `get_size`, `get_mimetype`, `get_timestamp` work.
    pub metadata: bool,
    /// `set_visibility` and `get_visibility` work.
    pub visibility: bool,
    /// Contents can be streamed instead of buffered.
    pub streams: bool,
}

/// Filesystem operations a storage backend must provide.
///
/// Paths are relative to the storage root; leading and trailing slashes are
/// ignored.
#[async_trait]
pub trait FilesystemAdapter: Send + Sync {
    /// Features this adapter supports.
    fn capabilities(&self) -> Capabilities;

    /// Write a new file.
    async fn write(&self, path: &str, contents: &[u8], config: &Config) -> Result<EntryDescriptor>;

    /// Replace the contents of an existing file.
    async fn update(
        &self,
        path: &str,
        contents: &[u8],
        config: &Config,
    ) -> Result<EntryDescriptor>;

    /// Read a file.
    async fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// Rename or move a file.
    async fn rename(&self, path: &str, new_path: &str) -> Result<()>;

    /// Copy a file.
    async fn copy(&self, path: &str, new_path: &str) -> Result<()>;

    /// Delete a file.
    async fn delete(&self, path: &str) -> Result<()>;

    /// Delete a directory and everything below it.
    async fn delete_dir(&self, path: &str) -> Result<()>;

    /// Create a directory.
    async fn create_dir(&self, path: &str, config: &Config) -> Result<EntryDescriptor>;

    /// Check whether a file exists.
    async fn has(&self, path: &str) -> Result<bool>;

    /// List the contents of a directory, optionally including all descendants.
    async fn list_contents(
        &self,
        directory: &str,
        recursive: bool,
    ) -> Result<Vec<EntryDescriptor>>;

    /// Describe a file or directory.
    async fn get_metadata(&self, path: &str) -> Result<EntryDescriptor>;

    /// Size of a file in bytes.
    async fn get_size(&self, path: &str) -> Result<u64>;

    /// Mimetype of a file, when known.
    async fn get_mimetype(&self, path: &str) -> Result<Option<String>>;

    /// Last modification time (Unix epoch seconds).
    async fn get_timestamp(&self, path: &str) -> Result<i64>;

    async fn set_visibility(&self, _path: &str, _visibility: Visibility) -> Result<()> {
        Err(OpenDriveError::Unsupported("visibility"))
    }

    async fn get_visibility(&self, _path: &str) -> Result<Visibility> {
        Err(OpenDriveError::Unsupported("visibility"))
    }
}
