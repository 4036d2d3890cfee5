//! Version-gated workarounds for known Dataverse bugs.
//!
//! A quirk names a service defect and the version prefix it applies to. The
//! sync operation consults this table instead of comparing version strings
//! inline, so new workarounds slot in without touching the orchestration.

/// A known service defect, keyed by version prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quirk {
    /// Short identifier, used in log lines.
    pub name: &'static str,
    /// Versions starting with this prefix are affected.
    pub version_prefix: &'static str,
    /// What the defect is.
    pub description: &'static str,
}

impl Quirk {
    /// Check if a reported service version is affected.
    pub fn applies_to(&self, version: &str) -> bool {
        version.starts_with(self.version_prefix)
    }
}

/// Dataverse 5.12 fails on file deletion from published datasets.
const DELETION_BROKEN_5_12: Quirk = Quirk {
    name: "deletion-broken",
    version_prefix: "5.12",
    description: "file deletion is broken in Dataverse 5.12; orphaned files are left in place",
};

/// All quirks that disable remote file deletion.
const DELETION_QUIRKS: &[Quirk] = &[DELETION_BROKEN_5_12];

/// Get the quirk disabling deletion for this service version, if any.
pub fn deletion_broken(version: &str) -> Option<&'static Quirk> {
    DELETION_QUIRKS.iter().find(|q| q.applies_to(version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_prefix_disables_deletion() {
        assert!(deletion_broken("5.12").is_some());
        assert!(deletion_broken("5.12.1").is_some());
    }

    #[test]
    fn test_other_versions_unaffected() {
        assert!(deletion_broken("5.11").is_none());
        assert!(deletion_broken("5.13").is_none());
        assert!(deletion_broken("6.0").is_none());
    }

    #[test]
    fn test_prefix_match_is_anchored() {
        // "x5.12" does not start with the prefix
        assert!(deletion_broken("x5.12").is_none());
    }
}
