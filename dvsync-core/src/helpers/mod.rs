//! Low-level utilities: hashing, ignore patterns, tree walking.

pub mod hash;
pub mod ignore;
pub mod walk;

pub use hash::md5_file;
pub use ignore::IgnoreSet;
pub use walk::enumerate_files;
