use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub content_url: String,
    #[serde(default)]
    pub content_refresh_enabled: bool,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            content_url: String::new(),
            content_refresh_enabled: false,
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

    #[allow(dead_code)]
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
            .join("dblab")
            .join("config.toml")
    }

    /// Reset an unknown theme name to the default. Call after
    /// deserialization to handle renamed or removed themes in old configs.
    pub fn normalize_theme(&mut self, available: &[String]) {
        if !available.iter().any(|t| t == &self.theme) {
            self.theme = default_theme();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert!(config.content_url.is_empty());
        assert!(!config.content_refresh_enabled);
    }

    #[test]
    fn partial_config_keeps_defaults_for_the_rest() {
        let config: Config = toml::from_str(r#"theme = "terminal-default""#).unwrap();
        assert_eq!(config.theme, "terminal-default");
        assert!(!config.content_refresh_enabled);
    }

    #[test]
    fn serde_round_trip() {
        let mut config = Config::default();
        config.content_url = "https://lab.example.edu/content.json".to_string();
        config.content_refresh_enabled = true;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.content_url, deserialized.content_url);
        assert_eq!(
            config.content_refresh_enabled,
            deserialized.content_refresh_enabled
        );
    }

    #[test]
    fn normalize_theme_resets_unknown_names() {
        let available = vec![
            "catppuccin-mocha".to_string(),
            "terminal-default".to_string(),
        ];

        let mut config = Config::default();
        config.theme = "terminal-default".to_string();
        config.normalize_theme(&available);
        assert_eq!(config.theme, "terminal-default");

        config.theme = "nonexistent".to_string();
        config.normalize_theme(&available);
        assert_eq!(config.theme, "catppuccin-mocha");
    }
}
