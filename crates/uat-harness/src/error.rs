//! Typed harness failures that callers may want to match on.
//!
//! Plain I/O failures travel as `anyhow::Error` with context; these variants
//! cover lookups and the single checksum comparison.

use crate::checksum::FileChecksum;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// No test file was registered in the scenario under this key.
    #[error("no test file registered for key {key:?}")]
    UnknownTestFile { key: String },

    /// File content no longer matches the checksum taken at creation.
    #[error("checksum mismatch for {}: expected {expected}, got {actual}", .path.display())]
    ChecksumMismatch {
        path: PathBuf,
        expected: FileChecksum,
        actual: FileChecksum,
    },
}
