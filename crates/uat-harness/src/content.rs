//! Where test-file bytes come from.
//!
//! The running executable is the default: it is non-trivial and always at
//! hand. `Pattern` covers environments without a resolvable executable path.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Write};

/// Default length for `Pattern` content when none is configured (1 MiB).
pub const DEFAULT_PATTERN_LEN: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentSource {
    /// Copy the bytes of the currently running executable.
    #[default]
    CurrentExe,
    /// Repeating 0..=255 byte pattern of `len` bytes.
    Pattern {
        #[serde(default = "default_pattern_len")]
        len: usize,
    },
}

fn default_pattern_len() -> usize {
    DEFAULT_PATTERN_LEN
}

impl ContentSource {
    /// Write this source's bytes into `out`. Returns the number of bytes written.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<u64> {
        match self {
            ContentSource::CurrentExe => {
                // Needs /proc/self/exe or the platform equivalent.
                let src_path = std::env::current_exe().context("unable to find path to self")?;
                let src = File::open(&src_path)
                    .with_context(|| format!("failed to open {} for read", src_path.display()))?;
                io::copy(&mut BufReader::new(src), out)
                    .context("failed to write data to test file")
            }
            ContentSource::Pattern { len } => {
                let pattern: Vec<u8> = (0..=255u8).collect();
                let mut remaining = *len;
                while remaining > 0 {
                    let n = remaining.min(pattern.len());
                    out.write_all(&pattern[..n])
                        .context("failed to write data to test file")?;
                    remaining -= n;
                }
                Ok(*len as u64)
            }
        }
    }
}
