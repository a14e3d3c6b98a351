//! Disposable test files with a checksum taken at creation.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::checksum::{self, FileChecksum};
use crate::content::ContentSource;
use crate::error::HarnessError;

/// A generated test file and the checksum of its content when written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFile {
    pub path: PathBuf,
    pub checksum: FileChecksum,
}

impl TestFile {
    /// Create a uniquely named file in `dir` starting with `prefix`, filled
    /// with the bytes of the running executable.
    pub fn new(dir: &Path, prefix: &str) -> Result<TestFile> {
        Self::with_content(dir, prefix, &ContentSource::CurrentExe)
    }

    /// Like [`TestFile::new`] with an explicit content source.
    ///
    /// The file is only persisted once content and checksum are in place;
    /// any earlier failure removes it again.
    pub fn with_content(dir: &Path, prefix: &str, content: &ContentSource) -> Result<TestFile> {
        create_with(dir, prefix, |out| content.write_to(out))
    }

    /// Recompute the checksum and compare it with the one taken at creation.
    pub fn verify(&self) -> Result<()> {
        let actual = checksum::file_checksum(&self.path)?;
        if actual != self.checksum {
            return Err(HarnessError::ChecksumMismatch {
                path: self.path.clone(),
                expected: self.checksum,
                actual,
            }
            .into());
        }
        Ok(())
    }
}

/// Create the temp file, fill it with `fill`, checksum it, then persist it.
fn create_with<F>(dir: &Path, prefix: &str, fill: F) -> Result<TestFile>
where
    F: FnOnce(&mut File) -> Result<u64>,
{
    // A separator in the prefix would place the file outside `dir`.
    if prefix.chars().any(std::path::is_separator) {
        bail!("test file prefix {:?} contains path separator", prefix);
    }

    let mut out = tempfile::Builder::new()
        .prefix(prefix)
        .tempfile_in(dir)
        .with_context(|| format!("unable to create test file in {}", dir.display()))?;

    let written = fill(out.as_file_mut())?;
    out.as_file_mut()
        .flush()
        .context("failed to write data to test file")?;

    let checksum = checksum::file_checksum(out.path())?;
    let path = out
        .into_temp_path()
        .keep()
        .context("unable to keep test file")?;

    tracing::debug!(
        "created test file: {} ({} bytes, sha256 {})",
        path.display(),
        written,
        checksum
    );
    Ok(TestFile { path, checksum })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn new_copies_running_executable() {
        let dir = tempfile::tempdir().unwrap();
        let tf = TestFile::new(dir.path(), "exe-").unwrap();
        assert!(tf.path.exists());
        assert!(tf.path.starts_with(dir.path()));
        let name = tf.path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("exe-"), "name was {}", name);

        let exe = fs::read(std::env::current_exe().unwrap()).unwrap();
        assert_eq!(fs::read(&tf.path).unwrap(), exe);
        assert_eq!(tf.checksum, FileChecksum::of_bytes(&exe));
    }

    #[test]
    fn checksum_matches_independent_reread() {
        let dir = tempfile::tempdir().unwrap();
        let tf = TestFile::with_content(dir.path(), "pat", &ContentSource::Pattern { len: 5000 })
            .unwrap();
        let reread = checksum::file_checksum(&tf.path).unwrap();
        assert_eq!(tf.checksum, reread);
        assert_eq!(fs::metadata(&tf.path).unwrap().len(), 5000);
    }

    #[test]
    fn names_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let src = ContentSource::Pattern { len: 16 };
        let a = TestFile::with_content(dir.path(), "same", &src).unwrap();
        let b = TestFile::with_content(dir.path(), "same", &src).unwrap();
        assert_ne!(a.path, b.path);
        assert_eq!(a.checksum, b.checksum);
    }

    #[test]
    fn missing_dir_fails_and_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = TestFile::new(&missing, "tf").unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("unable to create test file"), "{}", msg);
        assert!(msg.contains("does-not-exist"), "{}", msg);
        assert!(!missing.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn prefix_with_separator_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("scenario");
        fs::create_dir(&inner).unwrap();
        let src = ContentSource::Pattern { len: 16 };

        for prefix in ["../escaped-", "sub/tf", "/abs"] {
            let err = TestFile::with_content(&inner, prefix, &src).unwrap_err();
            assert!(
                format!("{:#}", err).contains("contains path separator"),
                "{}",
                err
            );
        }
        assert_eq!(fs::read_dir(&inner).unwrap().count(), 0);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn dotted_prefix_without_separator_stays_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let tf = TestFile::with_content(dir.path(), "..", &ContentSource::Pattern { len: 4 })
            .unwrap();
        assert_eq!(tf.path.parent(), Some(dir.path()));
    }

    #[test]
    fn failed_fill_removes_created_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = create_with(dir.path(), "partial", |out| {
            out.write_all(b"half written").unwrap();
            assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
            Err(anyhow::anyhow!("source went away"))
        })
        .unwrap_err();
        assert!(format!("{:#}", err).contains("source went away"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn verify_detects_modification() {
        let dir = tempfile::tempdir().unwrap();
        let tf = TestFile::with_content(dir.path(), "v", &ContentSource::Pattern { len: 300 })
            .unwrap();
        tf.verify().unwrap();

        fs::write(&tf.path, b"tampered").unwrap();
        let err = tf.verify().unwrap_err();
        match err.downcast_ref::<HarnessError>() {
            Some(HarnessError::ChecksumMismatch {
                path,
                expected,
                actual,
            }) => {
                assert_eq!(path, &tf.path);
                assert_eq!(expected, &tf.checksum);
                assert_eq!(actual, &FileChecksum::of_bytes(b"tampered"));
            }
            other => panic!("expected ChecksumMismatch, got {:?}", other),
        }
    }

    #[test]
    fn verify_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let tf = TestFile::with_content(dir.path(), "gone", &ContentSource::Pattern { len: 8 })
            .unwrap();
        fs::remove_file(&tf.path).unwrap();
        let err = tf.verify().unwrap_err();
        assert!(err.downcast_ref::<HarnessError>().is_none());
        assert!(format!("{:#}", err).contains("couldn't get checksum"));
    }
}
