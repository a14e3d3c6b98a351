//! Helpers for acceptance-test scenarios: disposable test files with known
//! content, their checksums, and per-scenario cleanup.

pub mod checksum;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod scenario;
pub mod test_file;

pub use checksum::{file_checksum, FileChecksum};
pub use content::ContentSource;
pub use error::HarnessError;
pub use scenario::ScenarioContext;
pub use test_file::TestFile;
