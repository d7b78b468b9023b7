//! Configuration loading and management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite store file.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Optional log file; logging is disabled when unset (the terminal
    /// belongs to the UI).
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            log_file: None,
        }
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("checklist/tasks.db"))
        .unwrap_or_else(|| PathBuf::from(".checklist/tasks.db"))
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default location or fall back to
    /// defaults, then apply environment overrides.
    pub fn load_or_default() -> Self {
        let mut config =
            Self::load(".checklist/config.yaml").unwrap_or_default();

        if let Ok(db_path) = std::env::var("CHECKLIST_DB_PATH") {
            config.db_path = PathBuf::from(db_path);
        }

        if let Ok(log_file) = std::env::var("CHECKLIST_LOG_FILE") {
            config.log_file = Some(PathBuf::from(log_file));
        }

        config
    }

    /// Ensure the store's parent directory exists.
    pub fn ensure_db_dir(&self) -> Result<()> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}
