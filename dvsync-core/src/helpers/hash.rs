//! MD5 hashing utilities.
//!
//! Dataverse publishes MD5 checksums for every data file, so the verifier
//! has to speak MD5 regardless of what stronger algorithms exist.

use std::io::Read;
use std::path::Path;

use fs_err as fs;
use fs_err::File;
use md5::{Digest, Md5};
use memmap2::Mmap;

use crate::SyncError;

/// Hash threshold for memory-mapped I/O (16KB).
pub const MMAP_THRESHOLD: u64 = 16 * 1024;

/// Compute the MD5 checksum of a file as a lowercase hex string.
///
/// Uses memory-mapped I/O for files >= 16KB, traditional read for smaller files.
pub fn md5_file(path: &Path) -> Result<String, SyncError> {
    let metadata = fs::metadata(path)?;
    let size = metadata.len();

    if size >= MMAP_THRESHOLD {
        hash_mmap(path)
    } else {
        hash_read(path)
    }
}

/// Hash a file using memory-mapped I/O.
fn hash_mmap(path: &Path) -> Result<String, SyncError> {
    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file)? };

    Ok(to_hex(&Md5::digest(&mmap[..])))
}

/// Hash a file using traditional read.
fn hash_read(path: &Path) -> Result<String, SyncError> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();

    let mut buffer = [0u8; 8192];
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(to_hex(&hasher.finalize()))
}

fn to_hex(digest: &[u8]) -> String {
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_known_md5() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("hello.txt");

        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"hello world").unwrap();
        drop(file);

        // MD5 of "hello world"
        assert_eq!(
            md5_file(&file_path).unwrap(),
            "5eb63bbbe01eeed093cb22bb8f5acdc3"
        );
    }

    #[test]
    fn test_empty_file_md5() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("empty");
        File::create(&file_path).unwrap();

        assert_eq!(
            md5_file(&file_path).unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_large_file_matches_small_path() {
        // Content above MMAP_THRESHOLD goes through the mmap path; hashing the
        // same bytes through both paths must agree.
        let temp = TempDir::new().unwrap();
        let content = vec![0xabu8; (MMAP_THRESHOLD as usize) + 1];

        let big = temp.path().join("big.bin");
        fs::write(&big, &content).unwrap();
        let big_hash = md5_file(&big).unwrap();

        assert_eq!(big_hash, to_hex(&Md5::digest(&content)));
    }

    #[test]
    fn test_missing_file_is_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let err = md5_file(&temp.path().join("nope")).unwrap_err();
        assert_eq!(err.error_type(), "filesystem_error");
    }
}
