//! Identifiers, descriptors and provider operations.

pub(crate) mod node;
pub(crate) mod operations;

pub use node::{EntryDescriptor, EntryType, NodeId, TrashKind, TrashedItem};
pub use operations::FolderOptions;
