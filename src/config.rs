//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory
//! (`~/.config/placepick/config.toml` on Linux) or from an explicit path.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, PlacesConfig, UiConfig};

use crate::error::PlacepickError;

/// Default location of the config file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("placepick").join("config.toml"))
}

/// Load configuration
///
/// An explicit path must exist. Without one, a missing default file yields
/// `Config::default()`.
pub fn load_config(path: Option<&Path>) -> Result<Config, PlacepickError> {
    match path {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

fn read_config(path: &Path) -> Result<Config, PlacepickError> {
    let content = fs::read_to_string(path).map_err(|source| PlacepickError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config = toml::from_str(&content).map_err(|e| PlacepickError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
