use crate::keymap::Keymap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Question file opened when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_quiz: Option<PathBuf>,
    /// Disable all UI colors
    #[serde(default)]
    pub no_colors: bool,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keymap: Keymap,
}

impl Config {
    /// Load configuration from file or create default
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            tracing::info!("Created default config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Colors are off when the config says so or `NO_COLOR` is set
    pub fn colors_disabled(&self) -> bool {
        self.no_colors || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
    }
}
