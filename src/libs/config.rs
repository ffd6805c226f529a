//! Configuration for the todolist application.
//!
//! Settings are layered, later sources winning:
//!
//! 1. Defaults: the database lives at `<data dir>/todolist.db`
//! 2. `config.json` in the platform data directory
//! 3. `TODOLIST_DB_PATH`, from the process environment or a `.env` file
//! 4. The `--db` command-line flag
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\todolist\todolist\config.json`
//! - **macOS**: `~/Library/Application Support/todolist/todolist/config.json`
//! - **Linux**: `~/.local/share/todolist/todolist/config.json`
//!
//! ## Example
//!
//! ```json
//! { "database": { "path": "/var/lib/todo/tasks.db" } }
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable that overrides the database path.
pub const DB_PATH_ENV: &str = "TODOLIST_DB_PATH";

/// Database location settings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DatabaseConfig {
    /// Path to the SQLite file, or `:memory:`. Unset means the default
    /// file in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Reads `config.json` from the data directory; a missing file yields
    /// the defaults.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new().path_of(CONFIG_FILE_NAME))
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
    }

    /// Resolves the full configuration: file, then `.env` and environment,
    /// then the command-line override.
    pub fn load(db_override: Option<PathBuf>) -> Result<Config> {
        dotenv::dotenv().ok();
        let mut config = Self::read()?;
        config.apply_env_value(std::env::var(DB_PATH_ENV).ok());
        if let Some(path) = db_override {
            config.database.path = Some(path.to_string_lossy().into_owned());
        }

        Ok(config)
    }

    /// Applies the value of `TODOLIST_DB_PATH`; blank values are ignored.
    pub fn apply_env_value(&mut self, value: Option<String>) {
        if let Some(path) = value.filter(|v| !v.trim().is_empty()) {
            msg_debug!(Message::ConfigEnvOverride(DB_PATH_ENV.to_string()));
            self.database.path = Some(path);
        }
    }

    pub fn database_path(&self) -> PathBuf {
        match &self.database.path {
            Some(path) => PathBuf::from(path),
            None => DataStorage::new().path_of(DB_FILE_NAME),
        }
    }
}
