//! dvsync command implementations.
//!
//! Each command delegates to dvsync-core for the actual logic.

pub mod sync;

use std::io;

use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core sync/verify error.
    #[error("{0}")]
    Sync(#[from] dvsync_core::SyncError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Get the error type as a stable string (used in JSON output).
    pub fn error_type(&self) -> &'static str {
        match self {
            CliError::Sync(e) => e.error_type(),
            CliError::Io(_) => "io_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_passes_through_core_strings() {
        let err = CliError::from(dvsync_core::SyncError::validation("bad token"));
        assert_eq!(err.error_type(), "validation_error");

        let err = CliError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.error_type(), "io_error");
    }
}
