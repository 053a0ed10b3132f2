//! Response payloads returned by the OpenDrive API.
//!
//! OpenDrive is loose about JSON types: sizes and timestamps arrive as
//! numbers or numeric strings, and list fields may be missing or `null`.
//! A missing, `null` or empty value reads as zero; anything else that is not
//! a number is rejected.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::fs::NodeId;

/// Response of `session/login.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "SessionID")]
    pub session_id: String,
    #[serde(rename = "UserName", default)]
    pub user_name: Option<String>,
}

/// Response of `folder/idbypath.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct FolderIdResponse {
    #[serde(rename = "FolderId", alias = "FolderID")]
    pub folder_id: NodeId,
}

/// Response of `file/idbypath.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileIdResponse {
    #[serde(rename = "FileId", alias = "FileID")]
    pub file_id: NodeId,
}

/// A file as returned by folder listings and `file/info.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    #[serde(rename = "FileId", alias = "FileID")]
    pub file_id: NodeId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Size", default, deserialize_with = "deserialize_lenient_u64")]
    pub size: u64,
    #[serde(
        rename = "DateModified",
        default,
        deserialize_with = "deserialize_lenient_i64"
    )]
    pub date_modified: i64,
    #[serde(rename = "Extension", default)]
    pub extension: Option<String>,
}

/// A folder as returned by listings, `folder.json` and `folder/info.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct FolderEntry {
    #[serde(rename = "FolderID", alias = "FolderId")]
    pub folder_id: NodeId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(
        rename = "DateModified",
        default,
        deserialize_with = "deserialize_lenient_i64"
    )]
    pub date_modified: i64,
}

/// Response of `folder/list.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderListing {
    #[serde(rename = "Files", default, deserialize_with = "deserialize_nullable")]
    pub files: Vec<FileEntry>,
    #[serde(rename = "Folders", default, deserialize_with = "deserialize_nullable")]
    pub folders: Vec<FolderEntry>,
}

impl FolderListing {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }
}

fn deserialize_nullable<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

fn deserialize_lenient_u64<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    match Value::deserialize(d)? {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("expected unsigned integer, got {}", n))),
        Value::String(s) if s.trim().is_empty() => Ok(0),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected unsigned integer, got {:?}", s))),
        other => Err(D::Error::custom(format!(
            "expected unsigned integer, got {}",
            other
        ))),
    }
}

fn deserialize_lenient_i64<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    match Value::deserialize(d)? {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .ok_or_else(|| D::Error::custom(format!("expected integer, got {}", n))),
        Value::String(s) if s.trim().is_empty() => Ok(0),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected integer, got {:?}", s))),
        other => Err(D::Error::custom(format!("expected integer, got {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_entry_string_numbers() {
        let entry: FileEntry = serde_json::from_value(json!({
            "FileId": "MV8xXzI",
            "Name": "a.txt",
            "Size": "10",
            "DateModified": "1478525134",
            "Extension": "txt",
            "Views": 3
        }))
        .unwrap();
        assert_eq!(entry.file_id.as_str(), "MV8xXzI");
        assert_eq!(entry.size, 10);
        assert_eq!(entry.date_modified, 1478525134);
        assert_eq!(entry.extension.as_deref(), Some("txt"));
    }

    #[test]
    fn test_file_entry_missing_optional_fields() {
        let entry: FileEntry =
            serde_json::from_value(json!({"FileId": 42, "Name": "raw", "Size": null})).unwrap();
        assert_eq!(entry.file_id.as_str(), "42");
        assert_eq!(entry.size, 0);
        assert_eq!(entry.date_modified, 0);
        assert!(entry.extension.is_none());
    }

    #[test]
    fn test_file_entry_rejects_malformed_numbers() {
        let bad = [
            json!({"FileId": "F1", "Name": "a", "Size": "12.5kB"}),
            json!({"FileId": "F1", "Name": "a", "Size": -3}),
            json!({"FileId": "F1", "Name": "a", "Size": true}),
            json!({"FileId": "F1", "Name": "a", "DateModified": "yesterday"}),
            json!({"FileId": "F1", "Name": "a", "DateModified": {"ts": 1}}),
        ];
        for value in bad {
            assert!(
                serde_json::from_value::<FileEntry>(value.clone()).is_err(),
                "accepted {value}"
            );
        }

        let folder = serde_json::from_value::<FolderEntry>(
            json!({"FolderID": "D1", "Name": "sub", "DateModified": [1]}),
        );
        assert!(folder.is_err());
    }

    #[test]
    fn test_file_entry_empty_numbers_read_as_zero() {
        let entry: FileEntry = serde_json::from_value(
            json!({"FileId": "F1", "Name": "a", "Size": "", "DateModified": 1.9e3}),
        )
        .unwrap();
        assert_eq!(entry.size, 0);
        assert_eq!(entry.date_modified, 1900);
    }

    #[test]
    fn test_listing_null_and_missing_arrays() {
        let listing: FolderListing =
            serde_json::from_value(json!({"Name": "root", "Files": null})).unwrap();
        assert!(listing.is_empty());

        let listing: FolderListing = serde_json::from_value(json!({
            "Files": [],
            "Folders": [{"FolderID": "F1", "Name": "sub", "DateModified": 7}]
        }))
        .unwrap();
        assert!(listing.files.is_empty());
        assert_eq!(listing.folders[0].folder_id.as_str(), "F1");
        assert_eq!(listing.folders[0].date_modified, 7);
    }

    #[test]
    fn test_id_aliases() {
        let folder: FolderIdResponse =
            serde_json::from_value(json!({"FolderID": "abc"})).unwrap();
        assert_eq!(folder.folder_id.as_str(), "abc");
        let folder: FolderEntry =
            serde_json::from_value(json!({"FolderId": "abc", "Name": "x"})).unwrap();
        assert_eq!(folder.folder_id.as_str(), "abc");
    }
}
