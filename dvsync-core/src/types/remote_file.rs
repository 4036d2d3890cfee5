//! Remote file entries as returned by the dataset API.

use serde::{Deserialize, Serialize};

/// One file of the dataset's latest version.
///
/// Deserialized from the `data.latestVersion.files[]` array of the dataset
/// endpoint. Owned entirely by the remote service; dvsync only reads these
/// and, for deletions, references them by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteFile {
    /// File name within the dataset.
    pub label: String,

    /// Directory label, absent for files at the dataset root.
    #[serde(
        rename = "directoryLabel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub directory_label: Option<String>,

    /// The underlying data file record.
    #[serde(rename = "dataFile")]
    pub data_file: DataFile,
}

/// The data file record nested inside a [`RemoteFile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFile {
    /// Numeric file identifier, used for access and deletion.
    pub id: u64,

    /// MD5 checksum as published by Dataverse.
    #[serde(default)]
    pub md5: String,
}

impl RemoteFile {
    /// Create a remote file entry (used by tests and fakes).
    pub fn new(
        label: impl Into<String>,
        directory_label: Option<String>,
        id: u64,
        md5: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            directory_label,
            data_file: DataFile {
                id,
                md5: md5.into(),
            },
        }
    }

    /// Directory label joined with the label, forming a path-like string.
    ///
    /// Files at the dataset root yield just the label.
    pub fn composite_path(&self) -> String {
        match self.directory_label.as_deref() {
            Some(dir) if !dir.is_empty() => format!("{}/{}", dir.trim_end_matches('/'), self.label),
            _ => self.label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_path_with_directory() {
        let file = RemoteFile::new("b.txt", Some("sub".to_string()), 7, "abc");
        assert_eq!(file.composite_path(), "sub/b.txt");
    }

    #[test]
    fn test_composite_path_at_root() {
        let file = RemoteFile::new("a.txt", None, 1, "abc");
        assert_eq!(file.composite_path(), "a.txt");

        let empty_dir = RemoteFile::new("a.txt", Some(String::new()), 1, "abc");
        assert_eq!(empty_dir.composite_path(), "a.txt");
    }

    #[test]
    fn test_deserialize_dataset_entry() {
        let json = r#"{
            "label": "train.csv",
            "directoryLabel": "data",
            "dataFile": {"id": 42, "md5": "d41d8cd98f00b204e9800998ecf8427e"}
        }"#;
        let file: RemoteFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.composite_path(), "data/train.csv");
        assert_eq!(file.data_file.id, 42);
        assert_eq!(file.data_file.md5, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_deserialize_without_directory_label() {
        let json = r#"{"label": "README.md", "dataFile": {"id": 1, "md5": "x"}}"#;
        let file: RemoteFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.directory_label, None);
        assert_eq!(file.composite_path(), "README.md");
    }
}
