//! CLI command implementations.

pub mod batch;
pub mod config;
pub mod parse;

use polex_core::PolexConfig;

/// Load configuration from an explicit path, or fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PolexConfig> {
    match config_path {
        Some(path) => Ok(PolexConfig::from_file(std::path::Path::new(path))?),
        None => Ok(PolexConfig::default()),
    }
}
