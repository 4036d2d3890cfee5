//! Synchronization: mirror the working tree into the dataset.
//!
//! The steps run strictly in order: service version, local enumeration,
//! registry write, remote listing, orphan deletion, full upload. There is no
//! rollback; a failed upload after successful deletions leaves the dataset in
//! an intermediate state, and the error surfaces to the caller as-is.

use std::path::Path;

use log::{info, warn};

use crate::client::DataverseApi;
use crate::helpers::{enumerate_files, IgnoreSet};
use crate::quirks;
use crate::types::{Registry, RemoteFile, SyncConfig, SyncError};

/// Summary of a sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Remote files deleted as orphans.
    pub deleted: usize,
    /// Orphans left in place because of a service quirk.
    pub skipped: usize,
    /// Files uploaded, including the registry.
    pub uploaded: usize,
}

/// Check if a remote file has been orphaned by the working tree.
///
/// A remote entry is orphaned when no local path occurs as a substring of its
/// composite path. The containment check is intentionally loose to tolerate
/// directory-prefix differences; it can under- or over-match when one path is
/// a substring of another unrelated path.
pub fn is_orphaned(composite_path: &str, local_paths: &[String]) -> bool {
    !local_paths
        .iter()
        .any(|local| composite_path.contains(local.as_str()))
}

/// Compose the directory label for an upload.
///
/// Joins the configured subdirectory prefix with the file's own parent
/// directory, collapsing empty components.
fn directory_label(subdir: &str, rel_path: &str) -> String {
    let parent = match rel_path.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => "",
    };
    match (subdir.is_empty(), parent.is_empty()) {
        (true, _) => parent.to_string(),
        (false, true) => subdir.to_string(),
        (false, false) => format!("{}/{}", subdir, parent),
    }
}

/// Read the registry published with the previous sync, if any.
///
/// The result is not consulted by the deletion pass yet; the call is kept so
/// a future version can restrict deletion to previously published paths.
fn fetch_remote_registry(
    remote_files: &[RemoteFile],
    api: &dyn DataverseApi,
) -> Result<Registry, SyncError> {
    let entry = remote_files
        .iter()
        .find(|f| f.label == Registry::filename());

    match entry {
        Some(file) => {
            let content = api.fetch_file(file.data_file.id)?;
            Ok(Registry::parse(&content))
        }
        None => Ok(Registry::default()),
    }
}

/// Delete remote files that are no longer present in the working tree.
fn remove_orphaned_files(
    remote_files: &[RemoteFile],
    local_paths: &[String],
    service_version: &str,
    api: &dyn DataverseApi,
    summary: &mut SyncSummary,
) -> Result<(), SyncError> {
    for file in remote_files {
        let composite = file.composite_path();
        if !is_orphaned(&composite, local_paths) {
            continue;
        }

        println!(
            "├── File '{}' is not present in the repository anymore - Deleting.",
            composite
        );

        if let Some(quirk) = quirks::deletion_broken(service_version) {
            warn!(
                "skipping deletion of '{}' ({}): {}",
                composite, quirk.name, quirk.description
            );
            summary.skipped += 1;
            continue;
        }

        api.delete_file(file.data_file.id)?;
        println!("├── File '{}' deleted.", composite);
        summary.deleted += 1;
    }
    Ok(())
}

/// Mirror the working tree at `root` into the configured dataset.
///
/// Deletes orphaned remote files first, then uploads the full local set plus
/// the registry.
pub fn sync(
    config: &SyncConfig,
    api: &dyn DataverseApi,
    root: &Path,
) -> Result<SyncSummary, SyncError> {
    let service_version = api.version()?;
    info!("remote service version: {}", service_version);

    let ignores = IgnoreSet::load(root)?;
    let local_paths = enumerate_files(root, &ignores)?;
    info!("{} local files to publish", local_paths.len());

    let registry = Registry::new(local_paths.clone());
    let registry_path = registry.write(root)?;

    let remote_files = api.list_files()?;

    // Read-only: kept for forward compatibility, see fetch_remote_registry.
    let _remembered = fetch_remote_registry(&remote_files, api)?;

    let mut summary = SyncSummary::default();
    remove_orphaned_files(
        &remote_files,
        &local_paths,
        &service_version,
        api,
        &mut summary,
    )?;

    for rel_path in &local_paths {
        let label = directory_label(config.directory(), rel_path);
        api.upload_file(&root.join(rel_path), &label)?;
        summary.uploaded += 1;
    }

    api.upload_file(&registry_path, config.directory())?;
    summary.uploaded += 1;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_orphaned_when_no_local_path_contained() {
        let paths = local(&["a.txt", "sub/b.txt"]);
        assert!(is_orphaned("old.txt", &paths));
        assert!(!is_orphaned("a.txt", &paths));
        assert!(!is_orphaned("sub/b.txt", &paths));
    }

    #[test]
    fn test_empty_local_set_orphans_everything() {
        assert!(is_orphaned("anything", &[]));
    }

    #[test]
    fn test_substring_containment_not_equality() {
        // Loose by design: a local path occurring anywhere in the composite
        // path keeps the remote file alive.
        let paths = local(&["b.txt"]);
        assert!(!is_orphaned("prefix/b.txt", &paths));
        assert!(!is_orphaned("sub/b.txt.bak", &paths));
    }

    #[test]
    fn test_directory_label_composition() {
        assert_eq!(directory_label("", "a.txt"), "");
        assert_eq!(directory_label("", "sub/b.txt"), "sub");
        assert_eq!(directory_label("mirror", "a.txt"), "mirror");
        assert_eq!(directory_label("mirror", "sub/b.txt"), "mirror/sub");
        assert_eq!(directory_label("mirror", "a/b/c.txt"), "mirror/a/b");
    }
}
