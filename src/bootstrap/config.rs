//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - ✅ Read TOML configuration files
//! - ✅ Parse TOML into the AppConfig DTO
//! - ✅ Report I/O and parsing errors with context
//!
//! ## Prohibited
//!
//! ❌ **No validation logic**
//! ❌ **No business rules**

use anyhow::Context;
use std::path::{Path, PathBuf};
use ii_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// Missing sections result in empty values; nothing is validated here.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Picks the configuration source.
///
/// An explicit path must exist. Without one, `default_path` is used when
/// present, and otherwise the config is empty apart from `app_data_root`.
/// A config that leaves `data_dir` empty inherits `app_data_root`.
pub fn resolve_config(
    explicit_path: Option<&Path>,
    default_path: &Path,
    app_data_root: PathBuf,
) -> anyhow::Result<AppConfig> {
    let mut config = match explicit_path {
        Some(path) => load_config(path)?,
        None if default_path.exists() => load_config(default_path)?,
        None => AppConfig::with_system_defaults(app_data_root.clone()),
    };

    if config.data_dir.as_os_str().is_empty() {
        config.data_dir = app_data_root;
    }
    Ok(config)
}
