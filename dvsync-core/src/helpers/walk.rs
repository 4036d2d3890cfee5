//! Local file enumeration.

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::helpers::ignore::IgnoreSet;
use crate::SyncError;

/// Check if an entry has a dot-prefixed file name.
///
/// The walk root itself is never considered hidden, even when the caller
/// passes `.`.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

/// Enumerate the regular files under `root`, as relative path strings.
///
/// Dot-prefixed path components are pruned during the walk, and paths
/// matching the ignore set are dropped. Order is filesystem traversal order,
/// not sorted.
pub fn enumerate_files(root: &Path, ignores: &IgnoreSet) -> Result<Vec<String>, SyncError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|e| !is_hidden(e));
    for entry in walker {
        let entry = entry.map_err(|e| SyncError::filesystem(e.to_string()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| SyncError::filesystem(e.to_string()))?;
        let rel = rel.to_string_lossy().replace('\\', "/");

        if !ignores.is_ignored(&rel) {
            files.push(rel);
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fs_err as fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"x").unwrap();
    }

    #[test]
    fn test_excludes_dot_prefixed_components() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.txt");
        touch(temp.path(), ".hidden");
        touch(temp.path(), ".git/config");
        touch(temp.path(), "sub/.secret");
        touch(temp.path(), "sub/b.txt");

        let mut files = enumerate_files(temp.path(), &IgnoreSet::default()).unwrap();
        files.sort();
        assert_eq!(files, vec!["a.txt", "sub/b.txt"]);
    }

    #[test]
    fn test_applies_ignore_patterns() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "keep.txt");
        touch(temp.path(), "drop.log");
        touch(temp.path(), "logs/nested.log");

        let ignores = IgnoreSet::from_lines(["*.log"]).unwrap();
        let mut files = enumerate_files(temp.path(), &ignores).unwrap();
        files.sort();
        assert_eq!(files, vec!["keep.txt"]);
    }

    #[test]
    fn test_keeps_regular_files_only() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "dir/inner.txt");
        fs::create_dir_all(temp.path().join("empty_dir")).unwrap();

        let files = enumerate_files(temp.path(), &IgnoreSet::default()).unwrap();
        assert_eq!(files, vec!["dir/inner.txt"]);
    }

    #[test]
    fn test_no_output_is_dot_prefixed_or_ignored() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.txt");
        touch(temp.path(), "b.tmp");
        touch(temp.path(), ".dvregistry");
        touch(temp.path(), "deep/down/.cache/blob");
        touch(temp.path(), "deep/down/keep.csv");

        let ignores = IgnoreSet::from_lines(["*.tmp"]).unwrap();
        let files = enumerate_files(temp.path(), &ignores).unwrap();

        for f in &files {
            assert!(!f.split('/').any(|c| c.starts_with('.')), "hidden: {}", f);
            assert!(!ignores.is_ignored(f), "ignored: {}", f);
        }
        assert_eq!(files.len(), 2);
    }
}
