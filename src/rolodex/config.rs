use crate::error::{RolodexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "rolodex.json";
const DEFAULT_DATA_FILE: &str = "data.json";
const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for rolodex, stored in rolodex.json next to the data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Address book file, relative to the config directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Records per page when listing
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| {
            RolodexError::FileAccess {
                path: config_path.clone(),
                source,
            }
        })?;
        let config: RolodexConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Data file resolved against `config_dir`
    pub fn data_path<P: AsRef<Path>>(&self, config_dir: P) -> PathBuf {
        config_dir.as_ref().join(&self.data_file)
    }

    /// Page size, never below one
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RolodexConfig::default();
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RolodexConfig::load(dir.path()).unwrap();
        assert_eq!(config, RolodexConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let config = RolodexConfig {
            data_file: PathBuf::from("friends.json"),
            page_size: 3,
        };
        config.save(dir.path()).unwrap();

        let loaded = RolodexConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page_size": 4}"#).unwrap();

        let loaded = RolodexConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 4);
        assert_eq!(loaded.data_file, PathBuf::from("data.json"));
    }

    #[test]
    fn test_data_path_and_page_size() {
        let mut config = RolodexConfig::default();
        assert_eq!(
            config.data_path("/home/me"),
            PathBuf::from("/home/me/data.json")
        );

        config.data_file = PathBuf::from("/srv/book.json");
        assert_eq!(config.data_path("/home/me"), PathBuf::from("/srv/book.json"));

        config.page_size = 0;
        assert_eq!(config.page_size(), 1);
    }
}
