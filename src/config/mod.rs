//! Configuration management for coursedeck

pub mod progress;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Average lesson length used for remaining-time estimates
pub const DEFAULT_MINUTES_PER_LESSON: u32 = 15;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selected theme name
    pub theme: String,

    /// Minutes assumed per remaining lesson in the progress tracker
    pub minutes_per_lesson: u32,

    /// Lock each lesson until every earlier lesson in its course is complete
    pub sequential_unlock: bool,

    /// Catalog file to load instead of the bundled one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Tokyo Night".to_string(),
            minutes_per_lesson: DEFAULT_MINUTES_PER_LESSON,
            sequential_unlock: false,
            catalog_path: None,
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path, writing defaults if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "coursedeck")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "coursedeck")
            .context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Get the log file path used while the TUI is running
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("coursedeck.log"))
    }

    /// Whether `theme` names a built-in theme
    pub fn theme_is_known(&self) -> bool {
        Theme::by_name(&self.theme).is_some()
    }

    /// Get the active theme; unknown names fall back to Tokyo Night
    pub fn active_theme(&self) -> Theme {
        Theme::by_name(&self.theme).unwrap_or_else(Theme::tokyo_night)
    }
}
