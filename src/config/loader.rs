//! Config file loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load configuration.
///
/// An explicit path must exist and parse. Without one, the platform
/// config dir is consulted; a missing file there just means defaults.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => read_file(path),
        None => match default_path() {
            Some(path) if path.exists() => read_file(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rollfive").join("config.toml"))
}
