//! In-memory Dataverse fake.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use dvsync_core::{DataverseApi, RemoteFile, SyncError};

/// One recorded API interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Version,
    ListFiles,
    FetchFile(u64),
    DeleteFile(u64),
    /// File name and directory label of an upload.
    UploadFile {
        file_name: String,
        directory_label: String,
    },
}

/// In-memory [`DataverseApi`] implementation.
///
/// Holds a fixed version string and file list, serves file contents by id,
/// and records every call in order so tests can assert on the exact API
/// traffic a run produced.
#[derive(Debug, Default)]
pub struct FakeDataverse {
    version: String,
    files: Vec<RemoteFile>,
    contents: HashMap<u64, String>,
    calls: RefCell<Vec<Call>>,
}

impl FakeDataverse {
    /// Create a fake reporting the given service version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Add a dataset file to the remote listing.
    pub fn with_file(
        mut self,
        label: &str,
        directory_label: Option<&str>,
        id: u64,
        md5: &str,
    ) -> Self {
        self.files.push(RemoteFile::new(
            label,
            directory_label.map(str::to_string),
            id,
            md5,
        ));
        self
    }

    /// Serve content for a file id (used for the remote registry).
    pub fn with_content(mut self, id: u64, content: &str) -> Self {
        self.contents.insert(id, content.to_string());
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Ids passed to `delete_file`, in order.
    pub fn deleted(&self) -> Vec<u64> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::DeleteFile(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// `(file_name, directory_label)` pairs passed to `upload_file`, in order.
    pub fn uploaded(&self) -> Vec<(String, String)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::UploadFile {
                    file_name,
                    directory_label,
                } => Some((file_name.clone(), directory_label.clone())),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl DataverseApi for FakeDataverse {
    fn version(&self) -> Result<String, SyncError> {
        self.record(Call::Version);
        Ok(self.version.clone())
    }

    fn list_files(&self) -> Result<Vec<RemoteFile>, SyncError> {
        self.record(Call::ListFiles);
        Ok(self.files.clone())
    }

    fn fetch_file(&self, id: u64) -> Result<String, SyncError> {
        self.record(Call::FetchFile(id));
        self.contents
            .get(&id)
            .cloned()
            .ok_or_else(|| SyncError::remote(404, format!("no datafile with id {}", id)))
    }

    fn delete_file(&self, id: u64) -> Result<(), SyncError> {
        self.record(Call::DeleteFile(id));
        if self.files.iter().any(|f| f.data_file.id == id) {
            Ok(())
        } else {
            Err(SyncError::remote(404, format!("no datafile with id {}", id)))
        }
    }

    fn upload_file(&self, local_path: &Path, directory_label: &str) -> Result<(), SyncError> {
        let file_name = local_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.record(Call::UploadFile {
            file_name,
            directory_label: directory_label.to_string(),
        });
        Ok(())
    }
}
