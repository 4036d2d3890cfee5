//! Ignore pattern utilities.
//!
//! Patterns come from the repository's `.gitignore`, but matching is plain
//! shell-glob against the full relative path, not gitignore semantics: no
//! negation, no directory anchoring, no nested ignore files.

use std::path::Path;

use fs_err as fs;
use glob::Pattern;

use crate::SyncError;

/// Name of the ignore-rules file read from the working directory.
pub const IGNORE_FILE: &str = ".gitignore";

/// A set of shell-glob ignore patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// Load patterns from the ignore-rules file in `root`, if present.
    ///
    /// A missing file yields an empty set. Comment lines (`#`) and blank
    /// lines are dropped.
    pub fn load(root: &Path) -> Result<Self, SyncError> {
        let path = root.join(IGNORE_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_lines(content.lines())
    }

    /// Build a set from raw pattern lines.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self, SyncError> {
        let mut patterns = Vec::new();
        for line in lines {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let pattern =
                Pattern::new(line).map_err(|_| SyncError::invalid_pattern(line.to_string()))?;
            patterns.push(pattern);
        }
        Ok(Self { patterns })
    }

    /// Check if a relative path matches any pattern.
    pub fn is_ignored(&self, rel_path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(rel_path))
    }

    /// Number of loaded patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the set has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_glob_matching() {
        let set = IgnoreSet::from_lines(["*.log", "target/*"]).unwrap();
        assert!(set.is_ignored("debug.log"));
        assert!(set.is_ignored("sub/run.log"));
        assert!(set.is_ignored("target/release"));
        assert!(!set.is_ignored("src/main.rs"));
    }

    #[test]
    fn test_comments_and_blank_lines_dropped() {
        let set = IgnoreSet::from_lines(["# build output", "", "*.o"]).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.is_ignored("a.o"));
        assert!(!set.is_ignored("# build output"));
    }

    #[test]
    fn test_missing_file_yields_empty_set() {
        let temp = TempDir::new().unwrap();
        let set = IgnoreSet::load(temp.path()).unwrap();
        assert!(set.is_empty());
        assert!(!set.is_ignored("anything"));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(IGNORE_FILE), "*.tmp\n# noise\ndata/*\n").unwrap();

        let set = IgnoreSet::load(temp.path()).unwrap();
        assert!(set.is_ignored("scratch.tmp"));
        assert!(set.is_ignored("data/raw.csv"));
        assert!(!set.is_ignored("kept.txt"));
    }

    #[test]
    fn test_invalid_pattern_errors() {
        let err = IgnoreSet::from_lines(["[unclosed"]).unwrap_err();
        assert_eq!(err.error_type(), "invalid_pattern");
    }
}
