//! Persistent CLI configuration.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_LOG_FILE_NAME: &str = "MyBabyLog.bblg";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub default_log: Option<PathBuf>,
}

const fn default_config_version() -> u32 {
    1
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bblg").join(CONFIG_FILE_NAME))
}

pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bblg")
        .join(DEFAULT_LOG_FILE_NAME)
}

/// Pick the log document: flag, then `BBLG_LOG_PATH`, then config, then the data dir
pub fn resolve_log_path(
    cli_log: Option<PathBuf>,
    env_log: Option<OsString>,
    config: &CliConfig,
) -> PathBuf {
    cli_log
        .or_else(|| env_log.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| config.default_log.clone())
        .unwrap_or_else(default_log_path)
}

impl CliConfig {
    pub fn load() -> Result<Self, String> {
        match default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))
    }

    pub fn save(&self) -> Result<PathBuf, String> {
        let path = default_config_path()
            .ok_or_else(|| "Failed to resolve CLI config directory".to_string())?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                )
            })?;
        }

        let serialized = serde_json::to_string_pretty(self)
            .map_err(|error| format!("Failed to serialize config: {error}"))?;
        std::fs::write(path, serialized)
            .map_err(|error| format!("Failed to write config at {}: {}", path.display(), error))
    }
}
