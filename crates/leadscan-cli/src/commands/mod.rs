//! Subcommand implementations.

pub mod config;
pub mod process;
pub mod scan;

use std::path::{Path, PathBuf};

use leadscan_core::models::config::LeadscanConfig;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("leadscan")
        .join("config.json")
}

/// Load the configuration from `--config`, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<LeadscanConfig> {
    if let Some(path) = config_path {
        return Ok(LeadscanConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(LeadscanConfig::from_file(&default_path)?)
    } else {
        Ok(LeadscanConfig::default())
    }
}
