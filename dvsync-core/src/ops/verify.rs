//! Integrity verification: assert the dataset mirrors the working tree.

use std::collections::HashMap;
use std::path::Path;

use log::info;

use crate::client::DataverseApi;
use crate::helpers::{enumerate_files, md5_file, IgnoreSet};
use crate::types::{Registry, SyncError};

/// Result of a successful verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
    /// Number of files whose checksums matched.
    pub files_checked: usize,
}

/// Compute the MD5 of every enumerated local file, keyed by relative path.
fn local_checksums(root: &Path) -> Result<HashMap<String, String>, SyncError> {
    let ignores = IgnoreSet::load(root)?;
    let mut checksums = HashMap::new();
    for rel_path in enumerate_files(root, &ignores)? {
        let md5 = md5_file(&root.join(&rel_path))?;
        checksums.insert(rel_path, md5);
    }
    Ok(checksums)
}

/// Check that the published files exactly match the working tree at `root`.
///
/// The registry entry itself is excluded from the comparison. Fails on the
/// first mismatch. Per-entry checks run before the count comparison, so a
/// published file missing from disk is reported by name; only a surplus of
/// local files surfaces as a count mismatch.
pub fn verify(api: &dyn DataverseApi, root: &Path) -> Result<VerifyReport, SyncError> {
    let remote_files: Vec<_> = api
        .list_files()?
        .into_iter()
        .filter(|f| f.label != Registry::filename())
        .collect();
    let local = local_checksums(root)?;
    info!(
        "comparing {} dataset files against {} local files",
        remote_files.len(),
        local.len()
    );

    for file in &remote_files {
        let composite = file.composite_path();
        let local_md5 = local.get(&composite).ok_or_else(|| SyncError::MissingLocal {
            path: composite.clone(),
        })?;
        if *local_md5 != file.data_file.md5 {
            return Err(SyncError::ChecksumMismatch {
                path: composite,
                remote: file.data_file.md5.clone(),
                local: local_md5.clone(),
            });
        }
    }

    // Every remote entry matched, so a count difference means extra local files
    if remote_files.len() != local.len() {
        return Err(SyncError::CountMismatch {
            remote: remote_files.len(),
            local: local.len(),
        });
    }

    Ok(VerifyReport {
        files_checked: remote_files.len(),
    })
}
