pub mod types;

use crate::error::{ConfigError, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, HadolintConfig};

const CONFIG_FILE_NAME: &str = ".hadolint-bridge.toml";

/// Get the global config file path (~/.hadolint-bridge.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (project/.hadolint-bridge.toml)
pub fn local_config_path(project_path: &Path) -> PathBuf {
    project_path.join(CONFIG_FILE_NAME)
}

/// Read and parse one config file.
pub fn load_config_file(path: &Path) -> std::result::Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration.
///
/// An explicit file must exist and parse. Otherwise the project directory is
/// checked first, then the home directory; unusable files there are skipped
/// with a warning and defaults apply when nothing is found.
pub fn load_config(explicit: Option<&Path>, project_path: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        return Ok(load_config_file(path)?);
    }

    let candidates = std::iter::once(local_config_path(project_path)).chain(global_config_path());
    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded configuration from {}", path.display());
                return Ok(config);
            }
            Err(err) => warn!("Ignoring config: {}", err),
        }
    }

    Ok(Config::default())
}
