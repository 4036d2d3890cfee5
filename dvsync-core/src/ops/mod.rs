//! High-level dvsync operations.

pub mod sync;
pub mod verify;

pub use sync::{sync, SyncSummary};
pub use verify::{verify, VerifyReport};
