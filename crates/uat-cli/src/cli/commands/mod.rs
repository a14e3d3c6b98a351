//! CLI command handlers, one per file.

mod checksum;
mod completions;
mod create;
mod scenario;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use create::run_create;
pub use scenario::run_scenario;

use std::path::{Path, PathBuf};
use uat_harness::config::HarnessConfig;
use uat_harness::ContentSource;

/// Directory from the command line, else from config.
fn target_dir(cfg: &HarnessConfig, dir: Option<&Path>) -> PathBuf {
    dir.map(Path::to_path_buf)
        .unwrap_or_else(|| cfg.effective_test_dir())
}

/// `--pattern-len` overrides the configured content source.
fn content_source(cfg: &HarnessConfig, pattern_len: Option<usize>) -> ContentSource {
    match pattern_len {
        Some(len) => ContentSource::Pattern { len },
        None => cfg.content.clone(),
    }
}
