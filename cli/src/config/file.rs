//! Configuration file structure and operations.

use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, write};
use std::path::Path;

use super::types::{SplashSettings, UiSettings};

/// The complete configuration file structure.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub splash: SplashSettings,
    pub ui: UiSettings,
}

impl ConfigFile {
    pub(crate) fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str::<ConfigFile>(content)
            .map_err(|e| ConfigError::Message(format!("Failed to parse config file: {}", e)))
    }

    /// Write the file, creating parent directories as needed.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        if let Some(parent) = path.as_ref().parent() {
            create_dir_all(parent).map_err(|e| format!("{}", e))?;
        }
        let config_str = toml::to_string_pretty(self).map_err(|e| format!("{}", e))?;
        write(path, config_str).map_err(|e| format!("{}", e))
    }
}
