//! Core data types for dvsync.

pub mod error;
pub mod config;
pub mod remote_file;
pub mod registry;

pub use error::SyncError;
pub use config::SyncConfig;
pub use remote_file::{RemoteFile, DataFile};
pub use registry::Registry;
