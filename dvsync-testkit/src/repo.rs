//! Temporary working tree utilities.

use std::io;
use std::path::{Path, PathBuf};

use fs_err as fs;
use tempfile::TempDir;

/// A temporary working tree for sync tests.
///
/// The directory is automatically cleaned up when dropped.
pub struct TempRepo {
    /// Temporary directory containing the tree.
    _temp: TempDir,
    /// Path to the tree root.
    root: PathBuf,
}

impl TempRepo {
    /// Create a new empty working tree.
    pub fn new() -> io::Result<Self> {
        let temp = TempDir::new()?;
        let root = temp.path().to_path_buf();
        Ok(Self { _temp: temp, root })
    }

    /// Get the tree root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative path inside the tree.
    pub fn path(&self, rel_path: &str) -> PathBuf {
        self.root.join(rel_path)
    }

    /// Write a file, creating parent directories as needed.
    pub fn write_file(&self, rel_path: &str, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.root.join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write ignore rules, one pattern per line.
    pub fn write_gitignore(&self, patterns: &[&str]) -> io::Result<PathBuf> {
        let mut content = patterns.join("\n");
        content.push('\n');
        self.write_file(".gitignore", content.as_bytes())
    }

    /// Read a file from the tree.
    pub fn read_file(&self, rel_path: &str) -> io::Result<String> {
        fs::read_to_string(self.root.join(rel_path))
    }

    /// Check if a file exists in the tree.
    pub fn file_exists(&self, rel_path: &str) -> bool {
        self.root.join(rel_path).exists()
    }
}
