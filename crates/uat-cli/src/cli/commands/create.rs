//! Create command: write a test file and leave it in place.

use anyhow::Result;
use std::path::Path;
use uat_harness::config::HarnessConfig;
use uat_harness::TestFile;

pub fn run_create(
    cfg: &HarnessConfig,
    dir: Option<&Path>,
    prefix: &str,
    pattern_len: Option<usize>,
) -> Result<()> {
    let dir = super::target_dir(cfg, dir);
    let content = super::content_source(cfg, pattern_len);
    let tf = TestFile::with_content(&dir, prefix, &content)?;
    tracing::info!("created test file {}", tf.path.display());
    println!("{}  {}", tf.checksum, tf.path.display());
    Ok(())
}
