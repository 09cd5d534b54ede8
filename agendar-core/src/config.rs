//! Global agendar configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AgendarError, AgendarResult};

/// Global configuration at ~/.config/agendar/config.toml
///
/// Records which account and calendar to use when the command line doesn't
/// say. The account is filled in automatically after `agendar auth`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_calendar: Option<String>,
}

impl GlobalConfig {
    pub fn config_path() -> AgendarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendarError::Config("Could not determine config directory".into()))?
            .join("agendar");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is missing.
    pub fn load() -> AgendarResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        toml::from_str(&contents).map_err(|e| {
            AgendarError::Config(format!("Could not parse {}: {}", path.display(), e))
        })
    }

    /// Save the current config, creating parent directories as needed.
    pub fn save(&self) -> AgendarResult<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| AgendarError::Config(e.to_string()))?;

        std::fs::write(&path, contents)?;

        Ok(())
    }
}
