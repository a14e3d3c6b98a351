//! Per-scenario state: registered test files and deferred cleanup actions.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::content::ContentSource;
use crate::error::HarnessError;
use crate::test_file::TestFile;

/// Deferred action run by [`ScenarioContext::run_cleanup`].
pub type CleanupFn = Box<dyn FnOnce() -> Result<()>>;

/// Caller-owned state for one test scenario. Not shared across threads.
#[derive(Default)]
pub struct ScenarioContext {
    test_files: HashMap<String, TestFile>,
    content: ContentSource,
    cleanups: Vec<CleanupFn>,
}

impl fmt::Debug for ScenarioContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioContext")
            .field("test_files", &self.test_files)
            .field("content", &self.content)
            .field("pending_cleanups", &self.cleanups.len())
            .finish()
    }
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context whose test files are filled from `content` instead of the running executable.
    pub fn with_content(content: ContentSource) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    pub fn content(&self) -> &ContentSource {
        &self.content
    }

    /// Queue an action for [`ScenarioContext::run_cleanup`].
    pub fn add_cleanup<F>(&mut self, f: F)
    where
        F: FnOnce() -> Result<()> + 'static,
    {
        self.cleanups.push(Box::new(f));
    }

    /// Test files registered so far, by key.
    pub fn test_files(&self) -> &HashMap<String, TestFile> {
        &self.test_files
    }

    pub fn pending_cleanups(&self) -> usize {
        self.cleanups.len()
    }

    /// Create a test file in `dir` named after `key`, register its removal
    /// for cleanup and record it under `key`. Returns the file's path.
    ///
    /// Reusing a key replaces the record; the earlier file is still removed at cleanup.
    pub fn create_test_file(&mut self, dir: &Path, key: &str) -> Result<PathBuf> {
        let tf = TestFile::with_content(dir, key, &self.content)
            .context("could not generate test file")?;

        let path = tf.path.clone();
        let cleanup_path = tf.path.clone();
        self.add_cleanup(move || {
            std::fs::remove_file(&cleanup_path)
                .with_context(|| format!("failed to remove test file {}", cleanup_path.display()))
        });
        self.test_files.insert(key.to_string(), tf);

        Ok(path)
    }

    /// Look up the test file registered under `key`.
    pub fn test_file(&self, key: &str) -> Result<&TestFile> {
        self.test_files.get(key).ok_or_else(|| {
            HarnessError::UnknownTestFile {
                key: key.to_string(),
            }
            .into()
        })
    }

    /// Check the file under `key` still has the checksum it was created with.
    pub fn verify_test_file(&self, key: &str) -> Result<()> {
        self.test_file(key)?.verify()
    }

    /// Run queued cleanups, most recently added first. Every action runs once
    /// even if an earlier one fails; the first failure is returned.
    pub fn run_cleanup(&mut self) -> Result<()> {
        let total = self.cleanups.len();
        let mut failures = 0usize;
        let mut first_err: Option<anyhow::Error> = None;

        while let Some(cleanup) = self.cleanups.pop() {
            if let Err(e) = cleanup() {
                tracing::warn!("cleanup failed: {:#}", e);
                failures += 1;
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
        self.test_files.clear();
        tracing::debug!("ran {} cleanup actions ({} failed)", total, failures);

        match first_err {
            Some(e) => Err(e.context(format!("{} of {} cleanup actions failed", failures, total))),
            None => Ok(()),
        }
    }
}
