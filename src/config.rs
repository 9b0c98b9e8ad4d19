use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

use crate::collect::CollectOptions;
use crate::license::LicenseSource;

/// Name of the `[tool.*]` table read from pyproject.toml.
pub const TOOL_SECTION: &str = "py-license-inventory";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format (table, json)
    pub format: Option<String>,

    /// Which metadata license names are shown from
    pub from: Option<LicenseSource>,

    /// Report PEP 503 normalized package names
    pub normalize_names: Option<bool>,

    /// Collect license file contents
    pub include_license_files: Option<bool>,

    /// Collect notice and copyright file contents
    pub include_notice_files: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        let options = CollectOptions::default();
        Self {
            format: Some("table".to_string()),
            from: Some(LicenseSource::Mixed),
            normalize_names: Some(options.normalize_names),
            include_license_files: Some(options.include_license_files),
            include_notice_files: Some(options.include_notice_files),
        }
    }
}

impl Config {
    /// Collection options from this config, with unset keys at their
    /// defaults.
    pub fn collect_options(&self) -> CollectOptions {
        let defaults = CollectOptions::default();
        CollectOptions {
            normalize_names: self.normalize_names.unwrap_or(defaults.normalize_names),
            include_license_files: self
                .include_license_files
                .unwrap_or(defaults.include_license_files),
            include_notice_files: self
                .include_notice_files
                .unwrap_or(defaults.include_notice_files),
        }
    }

    pub fn license_source(&self) -> LicenseSource {
        self.from.unwrap_or_default()
    }
}

pub fn pyproject_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("pyproject.toml")
}

/// Load configuration from pyproject.toml in the current directory
pub fn load_config() -> Result<Config> {
    load_config_from(&pyproject_path())
}

/// Load configuration from the given pyproject.toml. A missing file or a
/// file without a `[tool.py-license-inventory]` table yields the defaults.
pub fn load_config_from(pyproject_path: &Path) -> Result<Config> {
    if !pyproject_path.exists() {
        tracing::debug!(path = %pyproject_path.display(), "no pyproject.toml, using default configuration");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(pyproject_path)
        .with_context(|| format!("Failed to read pyproject.toml: {}", pyproject_path.display()))?;

    let pyproject: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse pyproject.toml: {}", pyproject_path.display()))?;

    if let Some(section) = pyproject.get("tool").and_then(|tool| tool.get(TOOL_SECTION)) {
        let config: Config = section
            .clone()
            .try_into()
            .with_context(|| format!("Failed to parse [tool.{}] section", TOOL_SECTION))?;
        return Ok(config);
    }

    Ok(Config::default())
}
