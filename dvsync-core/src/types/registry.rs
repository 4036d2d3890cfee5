//! Registry types for tracking published paths.
//!
//! The registry (`.dvregistry`) is a flat newline-delimited list of relative
//! paths, written to the working directory on every sync and uploaded to the
//! dataset root alongside the other files. It records what the repository
//! believed it published as of the last sync.

use std::path::{Path, PathBuf};

use fs_err as fs;

use crate::SyncError;

/// An ordered sequence of relative paths, one per registry line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    paths: Vec<String>,
}

impl Registry {
    /// Create a registry from a path sequence.
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    /// Get the registry filename.
    pub const fn filename() -> &'static str {
        ".dvregistry"
    }

    /// Parse registry content, one path per line.
    ///
    /// A single trailing newline does not produce an empty entry.
    pub fn parse(content: &str) -> Self {
        Self {
            paths: content.lines().map(str::to_string).collect(),
        }
    }

    /// Write the registry into `dir`, overwriting any previous content.
    ///
    /// Returns the path of the written file.
    pub fn write(&self, dir: &Path) -> Result<PathBuf, SyncError> {
        let path = dir.join(Self::filename());
        let mut content = self.paths.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of recorded paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }
}
