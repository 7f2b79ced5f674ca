use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_min_level")]
    pub min_level: u8,
    #[serde(default = "default_max_level")]
    pub max_level: u8,
    /// Path to a learner-supplied JSON word list; the bundled list when unset.
    #[serde(default)]
    pub dataset: Option<String>,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_min_level() -> u8 {
    1
}
fn default_max_level() -> u8 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            min_level: default_min_level(),
            max_level: default_max_level(),
            dataset: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hskdr")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.min_level, 1);
        assert_eq!(config.max_level, 1);
        assert!(config.dataset.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str("max_level = 4\n").unwrap();
        assert_eq!(config.max_level, 4);
        assert_eq!(config.min_level, 1);
        assert_eq!(config.theme, "catppuccin-mocha");
    }

    #[test]
    fn test_roundtrip() {
        let mut config = Config::default();
        config.min_level = 2;
        config.max_level = 5;
        config.dataset = Some("words.json".to_string());
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.min_level, 2);
        assert_eq!(deserialized.max_level, 5);
        assert_eq!(deserialized.dataset.as_deref(), Some("words.json"));
    }
}
