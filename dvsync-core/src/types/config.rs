//! Synchronization configuration.
//!
//! The original tooling kept the service URL and token in module-level
//! globals; here everything an operation needs travels in one explicit
//! [`SyncConfig`] value.

use uuid::Uuid;

use crate::SyncError;

/// Configuration shared by the synchronizer and the verifier.
///
/// Construct with [`SyncConfig::new`] to get input validation, or with
/// [`SyncConfig::unchecked`] when the values are already trusted (e.g. in
/// tests or when talking to a non-DOI installation).
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Base URL of the Dataverse installation, without trailing slash.
    base_url: String,
    /// Persistent identifier of the target dataset.
    persistent_id: String,
    /// API token, sent as `X-Dataverse-key` on every authenticated call.
    api_token: String,
    /// Upload subdirectory prefix, may be empty.
    directory: String,
}

impl SyncConfig {
    /// Create a validated configuration.
    ///
    /// Fails fast, before any network call, when the persistent id does not
    /// start with `doi:` or the API token is not a valid UUID.
    pub fn new(
        base_url: impl Into<String>,
        persistent_id: impl Into<String>,
        api_token: impl Into<String>,
        directory: impl Into<String>,
    ) -> Result<Self, SyncError> {
        let persistent_id = persistent_id.into();
        if !persistent_id.starts_with("doi:") {
            return Err(SyncError::validation(format!(
                "persistent id must start with 'doi:', got '{}'",
                persistent_id
            )));
        }

        let api_token = api_token.into();
        if Uuid::parse_str(&api_token).is_err() {
            return Err(SyncError::validation(
                "api token is not a valid UUID".to_string(),
            ));
        }

        Ok(Self::unchecked(base_url, persistent_id, api_token, directory))
    }

    /// Create a configuration without input validation.
    pub fn unchecked(
        base_url: impl Into<String>,
        persistent_id: impl Into<String>,
        api_token: impl Into<String>,
        directory: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            persistent_id: persistent_id.into(),
            api_token: api_token.into(),
            directory: directory.into(),
        }
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Persistent identifier of the dataset.
    pub fn persistent_id(&self) -> &str {
        &self.persistent_id
    }

    /// API token.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Upload subdirectory prefix (empty = dataset root).
    pub fn directory(&self) -> &str {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "1e686bd2-b283-4a24-a24c-8518e461fbb8";

    #[test]
    fn test_valid_config() {
        let config = SyncConfig::new(
            "https://demo.dataverse.org/",
            "doi:10.5072/FK2/ABC123",
            TOKEN,
            "",
        )
        .unwrap();
        // Trailing slash is trimmed at construction
        assert_eq!(config.base_url(), "https://demo.dataverse.org");
        assert_eq!(config.directory(), "");
    }

    #[test]
    fn test_rejects_non_uuid_token() {
        let err = SyncConfig::new(
            "https://demo.dataverse.org",
            "doi:10.5072/FK2/ABC123",
            "not-a-uuid",
            "",
        )
        .unwrap_err();
        assert_eq!(err.error_type(), "validation_error");
    }

    #[test]
    fn test_rejects_non_doi_persistent_id() {
        let err = SyncConfig::new("https://demo.dataverse.org", "hdl:1902.1/111", TOKEN, "")
            .unwrap_err();
        assert_eq!(err.error_type(), "validation_error");
    }

    #[test]
    fn test_unchecked_skips_validation() {
        let config = SyncConfig::unchecked("http://localhost:8080", "anything", "token", "sub");
        assert_eq!(config.persistent_id(), "anything");
        assert_eq!(config.directory(), "sub");
    }
}
