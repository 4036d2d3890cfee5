//! dvsync error types.
//!
//! One error enum covers both tools. Variants map to the failure classes a
//! caller can act on: bad input, a non-2xx response from Dataverse, a local
//! filesystem problem, or a mirror that does not match the working tree.

use thiserror::Error;

/// Main error type for dvsync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Malformed token or identifier. Raised before any network call.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Non-2xx response from the Dataverse API.
    #[error("remote service error: HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    /// HTTP transport failure (connection refused, request build, ...).
    #[error("http error: {message}")]
    Http { message: String },

    /// Unreadable local file or directory.
    #[error("filesystem error: {message}")]
    Filesystem { message: String },

    /// Malformed ignore pattern in the ignore-rules file.
    #[error("invalid ignore pattern: {pattern}")]
    InvalidPattern { pattern: String },

    /// Unexpected JSON shape in a Dataverse response.
    #[error("json error: {message}")]
    Json { message: String },

    /// Verifier: remote entry count differs from the local file count.
    #[error("integrity mismatch: dataset has {remote} files, working tree has {local}")]
    CountMismatch { remote: usize, local: usize },

    /// Verifier: a published file has no counterpart on disk.
    #[error("integrity mismatch: dataset file not present locally: {path}")]
    MissingLocal { path: String },

    /// Verifier: checksums differ for the same path.
    #[error("integrity mismatch for {path}: dataset md5 {remote}, local md5 {local}")]
    ChecksumMismatch {
        path: String,
        remote: String,
        local: String,
    },
}

impl SyncError {
    /// Get the error type as a stable string (used in JSON output).
    pub fn error_type(&self) -> &'static str {
        match self {
            SyncError::Validation { .. } => "validation_error",
            SyncError::Remote { .. } => "remote_service_error",
            SyncError::Http { .. } => "http_error",
            SyncError::Filesystem { .. } => "filesystem_error",
            SyncError::InvalidPattern { .. } => "invalid_pattern",
            SyncError::Json { .. } => "json_error",
            SyncError::CountMismatch { .. }
            | SyncError::MissingLocal { .. }
            | SyncError::ChecksumMismatch { .. } => "integrity_mismatch",
        }
    }

    // Convenience constructors for common error types

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        SyncError::Validation {
            message: message.into(),
        }
    }

    /// Create a remote service error from an HTTP status and response body.
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        SyncError::Remote {
            status,
            body: body.into(),
        }
    }

    /// Create a filesystem error.
    pub fn filesystem(message: impl Into<String>) -> Self {
        SyncError::Filesystem {
            message: message.into(),
        }
    }

    /// Create an invalid ignore pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>) -> Self {
        SyncError::InvalidPattern {
            pattern: pattern.into(),
        }
    }
}

// Conversion from common error types

impl From<std::io::Error> for SyncError {
    fn from(e: std::io::Error) -> Self {
        SyncError::Filesystem {
            message: e.to_string(),
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(e: reqwest::Error) -> Self {
        SyncError::Http {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(e: serde_json::Error) -> Self {
        SyncError::Json {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_strings() {
        assert_eq!(
            SyncError::validation("bad token").error_type(),
            "validation_error"
        );
        assert_eq!(
            SyncError::remote(404, "not found").error_type(),
            "remote_service_error"
        );
        assert_eq!(
            SyncError::filesystem("gone").error_type(),
            "filesystem_error"
        );
        assert_eq!(
            SyncError::MissingLocal {
                path: "a.txt".into()
            }
            .error_type(),
            "integrity_mismatch"
        );
    }

    #[test]
    fn test_remote_display_carries_status_and_body() {
        let e = SyncError::remote(403, "forbidden");
        let msg = e.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("forbidden"));
    }
}
