//! File checksums (SHA-256) used to confirm test-file content identity.
//!
//! Digests are compared for equality only; they are never used to address
//! or index files.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Length of a [`FileChecksum`] in bytes.
pub const CHECKSUM_LEN: usize = 32;

/// SHA-256 digest of a file's full contents. `Default` is the all-zero digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileChecksum([u8; CHECKSUM_LEN]);

impl FileChecksum {
    /// Digest of an in-memory buffer.
    pub fn of_bytes(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    pub fn as_bytes(&self) -> &[u8; CHECKSUM_LEN] {
        &self.0
    }

    /// True for the zero digest returned alongside a failed computation.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; CHECKSUM_LEN]> for FileChecksum {
    fn from(bytes: [u8; CHECKSUM_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for FileChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute the checksum of the file at `path`.
/// Reads in chunks so large executables used as content don't need a second copy in memory.
pub fn file_checksum(path: &Path) -> Result<FileChecksum> {
    let mut f = File::open(path)
        .with_context(|| format!("couldn't get checksum for {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("couldn't get checksum for {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(FileChecksum(hasher.finalize().into()))
}
