//! # opendrive-fs
//!
//! Rust client library for the OpenDrive cloud storage REST API, plus a
//! generic filesystem adapter built on top of it.
//!
//! ## Features
//!
//! - **Authentication**: Login with username/password, optional HTTP proxy,
//!   configurable API endpoint.
//! - **Filesystem Operations**:
//!   - List folders (flat or recursive).
//!   - Create directories, optionally public and with a description.
//!   - Move, copy, rename, and delete (trash + purge) files and folders.
//!   - Look up size, extension, and modification time of entries.
//! - **Adapter**: [`OpenDriveAdapter`] implements the [`FilesystemAdapter`]
//!   trait with path-based operations returning [`EntryDescriptor`]s.
//!
//! Paths are resolved to OpenDrive identifiers on every call; nothing is
//! cached between operations.
//!
//! ## Example: Basic Usage
//!
//! ```no_run
//! use opendrive_fs::{Config, FilesystemAdapter, OpenDriveAdapter, OpenDriveClient};
//!
//! # async fn example() -> opendrive_fs::Result<()> {
//! // Login
//! let client = OpenDriveClient::login("user", "password").await?;
//! let adapter = OpenDriveAdapter::new(client);
//!
//! // Create a directory and list the root
//! adapter.create_dir("reports/2024", &Config::new()).await?;
//! for entry in adapter.list_contents("", false).await? {
//!     println!("{} ({:?})", entry.path, entry.size);
//! }
//!
//! // Move a file
//! adapter.rename("draft.txt", "reports/2024/final.txt").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Custom Configuration
//!
//! ```no_run
//! use std::time::Duration;
//! use opendrive_fs::{ClientConfig, OpenDriveClient};
//!
//! # async fn example() -> opendrive_fs::Result<()> {
//! let config = ClientConfig::from_env().with_timeout(Duration::from_secs(30));
//! let client = OpenDriveClient::login_with_config("user", "password", &config).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod api;
mod client;
pub mod config;
pub mod error;
pub mod fs;
pub mod http;
pub mod session;

#[cfg(test)]
mod mock;

// Re-export commonly used types
pub use adapter::{Capabilities, Config, FilesystemAdapter, OpenDriveAdapter, Visibility};
pub use client::OpenDriveClient;
pub use config::ClientConfig;
pub use error::{OpenDriveError, Result};
pub use fs::{EntryDescriptor, EntryType, FolderOptions, NodeId, TrashKind, TrashedItem};
pub use http::{HttpClient, Transport};
pub use session::Session;
