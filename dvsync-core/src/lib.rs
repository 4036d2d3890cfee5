//! dvsync Core Library
//!
//! Mirrors the contents of a git working tree into a Dataverse dataset and
//! verifies that the published files match the tree on disk.
//!
//! # Architecture
//!
//! - `types`: Core data types (SyncConfig, RemoteFile, Registry, error types)
//! - `ops`: High-level operations (sync, verify)
//! - `client`: Blocking Dataverse HTTP client behind the [`DataverseApi`] trait
//! - `quirks`: Version-gated workarounds for known Dataverse bugs
//! - `helpers`: Low-level utilities (hashing, ignore patterns, tree walking)

pub mod types;
pub mod ops;
pub mod client;
pub mod quirks;
pub mod helpers;

// Re-export commonly used types at crate root
pub use types::{
    SyncConfig,
    RemoteFile,
    DataFile,
    Registry,
    SyncError,
};

// Re-export operations at crate root
pub use ops::{sync, SyncSummary};
pub use ops::{verify, VerifyReport};

// Re-export the API seam
pub use client::{DataverseApi, DataverseClient};
