use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::StoreError;

const DEFAULT_DIR_NAME: &str = ".cashbook";
const CONFIG_FILE: &str = "config.json";
const USERS_FILE: &str = "users.json";

/// User-editable application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Overrides the default user-database location when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_file: Option<PathBuf>,
    /// Currency label appended to rendered amounts.
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_file: None,
            currency: "USD".into(),
        }
    }
}

/// Returns the application data directory, defaulting to `~/.cashbook`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("CASHBOOK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default location of the user-database file.
pub fn default_database_file() -> PathBuf {
    app_data_dir().join(USERS_FILE)
}

/// Loads and saves the settings file under the application data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, StoreError> {
        Self::from_base(app_data_dir())
    }

    #[cfg(test)]
    pub fn with_base_dir(base: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::from_base(base.into())
    }

    fn from_base(base: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Reads the settings file, falling back to defaults when it is missing.
    pub fn load(&self) -> Result<Config, StoreError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_returns_defaults_when_the_file_is_missing() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path()).expect("manager");

        let config = manager.load().expect("load");
        assert_eq!(config.currency, "USD");
        assert!(config.database_file.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path()).expect("manager");
        let config = Config {
            database_file: Some(temp.path().join("elsewhere.json")),
            currency: "EUR".into(),
        };

        manager.save(&config).expect("save");
        let loaded = manager.load().expect("load");
        assert_eq!(loaded.currency, "EUR");
        assert_eq!(loaded.database_file, config.database_file);
    }
}
