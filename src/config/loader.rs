use super::Config;
use crate::error::ConfigError;
use anyhow::Context;
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".persona-governor";
const CONFIG_FILE: &str = "config.toml";

impl Config {
    /// `<home>/.persona-governor/config.toml`, if a home directory exists.
    pub fn default_path() -> Option<PathBuf> {
        UserDirs::new().map(|u| u.home_dir().join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads the config at `path`, or the default location when `path` is
    /// `None`. A missing file yields defaults; nothing is ever written.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = match path {
            Some(explicit) => Some(explicit.to_path_buf()),
            None => Self::default_path(),
        };

        let mut config = match resolved {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path)?,
            Some(config_path) if path.is_some() => {
                return Err(ConfigError::Load(format!(
                    "config file not found: {}",
                    config_path.display()
                )));
            }
            _ => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
            .map_err(|e| ConfigError::Load(format!("{e:#}")))?;
        Ok(config)
    }
}
