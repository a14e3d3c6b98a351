use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::ContentSource;

/// Harness configuration loaded from `~/.config/uat/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Directory for test files when a caller doesn't name one (None = system temp dir).
    #[serde(default)]
    pub test_dir: Option<PathBuf>,
    /// Content source for new test files.
    #[serde(default)]
    pub content: ContentSource,
}

impl HarnessConfig {
    /// Directory test files go to: configured `test_dir`, else the system temp dir.
    pub fn effective_test_dir(&self) -> PathBuf {
        self.test_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarnessConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarnessConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<HarnessConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: HarnessConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
