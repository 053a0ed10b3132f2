//! Provider operations split into focused modules.

mod browse;
mod delete;
mod dir_ops;
mod resolve;
pub(crate) mod utils;

pub use dir_ops::FolderOptions;
