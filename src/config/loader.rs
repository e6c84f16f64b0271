use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::LauncherError;

use super::types::Config;

const CONFIG_DIR: &str = "lolaunch";
const CONFIG_FILE: &str = "config.toml";

/// A config plus the warning to show if it had to fall back to defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

impl ConfigResult {
    fn defaults_with_warning(error: LauncherError) -> Self {
        log::warn!("{}", error);
        Self {
            config: Config::default(),
            warning: Some(format!("{}. Using defaults.", error)),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from `explicit` or the default location.
///
/// A missing default config is normal and silent; a missing explicit one
/// is reported.
pub fn load_config(explicit: Option<&Path>) -> ConfigResult {
    if let Some(path) = explicit {
        return load_config_from_path(path, true);
    }

    match config_path() {
        Some(path) => load_config_from_path(&path, false),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from_path(path: &Path, required: bool) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            log::debug!("No config at {}, using defaults", path.display());
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
        Err(e) => {
            return ConfigResult::defaults_with_warning(LauncherError::InvalidConfig {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(message) => ConfigResult::defaults_with_warning(LauncherError::InvalidConfig {
            path: path.to_path_buf(),
            message,
        }),
    }
}

/// Parse and validate config text
pub fn parse_config(content: &str) -> Result<Config, String> {
    let config: Config = toml::from_str(content).map_err(|e| e.message().to_string())?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
