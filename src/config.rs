use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub contacts: ContactsConfig,
    #[serde(default)]
    pub interface: InterfaceConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactsConfig {
    pub sort_on_load: bool,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self { sort_on_load: true }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct InterfaceConfig {
    pub prompt: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { contacts: ContactsConfig::default(), interface: InterfaceConfig::default() }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "rolodex", "rolodex")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.contacts.sort_on_load);
        assert!(config.interface.prompt.is_none());
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        let temp_dir = tempdir()?;
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        let mut config = Config::default();
        config.interface.prompt = Some(">> ".to_string());
        config.save()?;

        let loaded = Config::load()?;
        assert_eq!(loaded.interface.prompt, config.interface.prompt);
        assert_eq!(loaded.contacts.sort_on_load, config.contacts.sort_on_load);

        Ok(())
    }

    #[test]
    fn test_config_round_trips_through_toml() -> Result<()> {
        let mut config = Config::default();
        config.contacts.sort_on_load = false;

        let content = toml::to_string_pretty(&config)?;
        let back: Config = toml::from_str(&content)?;
        assert!(!back.contacts.sort_on_load);

        Ok(())
    }
}
