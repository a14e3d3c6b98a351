//! Scenario command: create, verify and clean up a set of keyed test files.

use anyhow::Result;
use std::path::Path;
use uat_harness::config::HarnessConfig;
use uat_harness::ScenarioContext;

/// Cleanup runs even when creation or verification fails part way.
pub fn run_scenario(
    cfg: &HarnessConfig,
    dir: Option<&Path>,
    pattern_len: Option<usize>,
    keys: &[String],
) -> Result<()> {
    let dir = super::target_dir(cfg, dir);
    let mut ctx = ScenarioContext::with_content(super::content_source(cfg, pattern_len));

    let outcome = create_and_verify(&mut ctx, &dir, keys);
    let cleanup = ctx.run_cleanup();
    outcome?;
    cleanup?;
    println!("scenario ok: {} files created, verified and removed", keys.len());
    Ok(())
}

fn create_and_verify(ctx: &mut ScenarioContext, dir: &Path, keys: &[String]) -> Result<()> {
    for key in keys {
        let path = ctx.create_test_file(dir, key)?;
        ctx.verify_test_file(key)?;
        let tf = ctx.test_file(key)?;
        println!("{}  {}  {}", key, tf.checksum, path.display());
    }
    Ok(())
}
