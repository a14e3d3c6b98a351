//! Checksum command: compute SHA-256 of a file.

use anyhow::Result;
use std::path::Path;
use uat_harness::checksum;

/// Compute and print SHA-256 of the given file.
pub fn run_checksum(path: &Path) -> Result<()> {
    let digest = checksum::file_checksum(path)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
