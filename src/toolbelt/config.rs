use crate::error::{Result, ToolbeltError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for toolbelt, stored as config.json in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ToolbeltConfig {
    /// Default catalog file used when no --file is given
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl ToolbeltConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ToolbeltError::Io)?;
        let config: ToolbeltConfig =
            serde_json::from_str(&content).map_err(ToolbeltError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ToolbeltError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ToolbeltError::Serialization)?;
        fs::write(config_path, content).map_err(ToolbeltError::Io)?;
        Ok(())
    }

    /// Get a config value by key, rendered for display. None means the key
    /// does not exist.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog" => Some(
                self.catalog
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string()),
            ),
            _ => None,
        }
    }

    /// Set a config value by key.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "catalog" => {
                self.catalog = Some(PathBuf::from(value));
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
