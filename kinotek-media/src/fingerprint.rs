//! Content fingerprinting for organized files.
//!
//! A fingerprint is a SHA-256 digest over a file's full byte content,
//! independent of its path or filesystem metadata. Two files with identical
//! bytes are the same logical asset wherever they live.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

const CHUNK_SIZE: usize = 64 * 1024; // 64 KB

/// Compute the SHA-256 fingerprint of a file, streaming in 64KB chunks.
///
/// Memory use is bounded regardless of file size. A read failure mid-stream
/// surfaces as `io::Error`; callers should treat that as "fingerprint
/// unavailable" and fall back to path-only duplicate checking.
pub fn fingerprint_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    fingerprint_reader(&mut file)
}

/// Compute the SHA-256 fingerprint of an arbitrary byte stream.
pub fn fingerprint_reader<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
