//! dvsync Test Kit.
//!
//! Utilities for testing dvsync end to end without a live Dataverse
//! installation.
//!
//! # Key Types
//!
//! - [`TempRepo`]: Builds a temporary working tree with files and ignore rules
//! - [`FakeDataverse`]: In-memory [`dvsync_core::DataverseApi`] recording calls
//!
//! # Example
//!
//! ```no_run
//! use dvsync_testkit::{FakeDataverse, TempRepo};
//!
//! let repo = TempRepo::new().unwrap();
//! repo.write_file("a.txt", b"hello").unwrap();
//!
//! let remote = FakeDataverse::new("6.0").with_file("old.txt", None, 2, "ff");
//! let config = dvsync_core::SyncConfig::unchecked("http://fake", "doi:x", "t", "");
//!
//! dvsync_core::sync(&config, &remote, repo.root()).unwrap();
//! assert_eq!(remote.deleted(), vec![2]);
//! ```

mod repo;
mod fake;
mod integration;

pub use repo::TempRepo;
pub use fake::{Call, FakeDataverse};

/// Re-export dvsync_core for convenience in tests.
pub use dvsync_core;
