//! Shared path helpers.
//!
//! OpenDrive paths are relative to the account root and carry no leading
//! slash: `""` is the root, `"a/b"` is folder `b` inside `a`.

/// Normalize a path (collapse `//`, drop leading and trailing slashes).
pub(crate) fn normalize_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Split a normalized path into its parent and leaf name.
///
/// Top-level entries have no parent.
pub(crate) fn split_path(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once('/') {
        Some((parent, name)) => (Some(parent), name),
        None => (None, path),
    }
}

/// Join a directory and a child name; the root contributes no prefix.
pub(crate) fn join_path(directory: &str, name: &str) -> String {
    if directory.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", directory, name)
    }
}
