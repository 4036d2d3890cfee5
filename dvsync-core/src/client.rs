//! Blocking client for the Dataverse HTTP API.
//!
//! The API surface is small and fixed: version info, the file list of a
//! dataset's latest version, raw file access, per-file deletion, and the
//! native multipart upload endpoint. Every authenticated call carries the API
//! token in the `X-Dataverse-key` header.

use std::path::Path;

use log::debug;
use reqwest::blocking::multipart::Form;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;

use crate::types::{RemoteFile, SyncConfig, SyncError};

/// Header carrying the API token.
const API_TOKEN_HEADER: &str = "X-Dataverse-key";

/// The Dataverse operations dvsync depends on.
///
/// This is the seam between the orchestration logic and the network: the
/// real [`DataverseClient`] implements it over HTTP, test fakes implement it
/// in memory.
pub trait DataverseApi {
    /// Fetch the service version string (`data.version`).
    fn version(&self) -> Result<String, SyncError>;

    /// Fetch the file list of the dataset's latest version.
    fn list_files(&self) -> Result<Vec<RemoteFile>, SyncError>;

    /// Fetch the raw content of a dataset file by id.
    fn fetch_file(&self, id: u64) -> Result<String, SyncError>;

    /// Delete a dataset file by id.
    fn delete_file(&self, id: u64) -> Result<(), SyncError>;

    /// Upload one local file, tagged with a directory label (empty = root).
    fn upload_file(&self, local_path: &Path, directory_label: &str) -> Result<(), SyncError>;
}

// Response envelopes. Dataverse wraps every payload in `{"status", "data"}`;
// only the parts dvsync reads are modeled.

#[derive(Debug, Deserialize)]
struct VersionResponse {
    data: VersionData,
}

#[derive(Debug, Deserialize)]
struct VersionData {
    version: String,
}

#[derive(Debug, Deserialize)]
struct DatasetResponse {
    data: DatasetData,
}

#[derive(Debug, Deserialize)]
struct DatasetData {
    #[serde(rename = "latestVersion")]
    latest_version: DatasetVersion,
}

#[derive(Debug, Deserialize)]
struct DatasetVersion {
    #[serde(default)]
    files: Vec<RemoteFile>,
}

/// HTTP implementation of [`DataverseApi`].
///
/// Strictly sequential blocking calls, no retries, no configured timeouts:
/// callers rely on the client's defaults.
#[derive(Debug)]
pub struct DataverseClient {
    http: Client,
    config: SyncConfig,
}

impl DataverseClient {
    /// Create a client for the installation described by `config`.
    pub fn new(config: SyncConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(API_TOKEN_HEADER, self.config.api_token())
    }

    /// Turn a non-success response into a [`SyncError::Remote`] carrying the
    /// HTTP status and body for diagnostics.
    fn ensure_success(response: Response) -> Result<Response, SyncError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().unwrap_or_default();
            Err(SyncError::remote(status.as_u16(), body))
        }
    }
}

impl DataverseApi for DataverseClient {
    fn version(&self) -> Result<String, SyncError> {
        let url = format!("{}/api/info/version", self.config.base_url());
        debug!("GET {}", url);

        let response = Self::ensure_success(self.http.get(&url).send()?)?;
        let parsed: VersionResponse = serde_json::from_str(&response.text()?)?;
        Ok(parsed.data.version)
    }

    fn list_files(&self) -> Result<Vec<RemoteFile>, SyncError> {
        let url = format!(
            "{}/api/datasets/:persistentId/?persistentId={}",
            self.config.base_url(),
            self.config.persistent_id()
        );
        debug!("GET {}", url);

        let response = Self::ensure_success(self.authed(self.http.get(&url)).send()?)?;
        let parsed: DatasetResponse = serde_json::from_str(&response.text()?)?;
        Ok(parsed.data.latest_version.files)
    }

    fn fetch_file(&self, id: u64) -> Result<String, SyncError> {
        let url = format!("{}/api/access/datafile/{}", self.config.base_url(), id);
        debug!("GET {}", url);

        let response = Self::ensure_success(self.authed(self.http.get(&url)).send()?)?;
        Ok(response.text()?)
    }

    fn delete_file(&self, id: u64) -> Result<(), SyncError> {
        let url = format!("{}/api/files/{}", self.config.base_url(), id);
        debug!("DELETE {}", url);

        Self::ensure_success(self.authed(self.http.delete(&url)).send()?)?;
        Ok(())
    }

    fn upload_file(&self, local_path: &Path, directory_label: &str) -> Result<(), SyncError> {
        let url = format!(
            "{}/api/datasets/:persistentId/add?persistentId={}",
            self.config.base_url(),
            self.config.persistent_id()
        );
        debug!("POST {} ({})", url, local_path.display());

        let mut form = Form::new().file("file", local_path)?;
        if !directory_label.is_empty() {
            let json_data = serde_json::json!({ "directoryLabel": directory_label });
            form = form.text("jsonData", json_data.to_string());
        }

        Self::ensure_success(self.authed(self.http.post(&url)).multipart(form).send()?)?;
        Ok(())
    }
}
