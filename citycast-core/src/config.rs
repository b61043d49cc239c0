use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable overriding [`Config::base_url`].
pub const BASE_URL_ENV: &str = "API_BASE_URL";
/// Environment variable overriding [`Config::api_key`].
pub const API_KEY_ENV: &str = "API_KEY";

/// Suggested provider root offered by `configure`.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Settings stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "https://api.openweathermap.org"
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Provider root, without the endpoint path.
    pub base_url: String,
    pub api_key: String,
    /// Where search history is kept; platform data dir when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_file: Option<PathBuf>,
}

impl Config {
    /// Load the config file and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_file()?;
        cfg.apply_env(|name| std::env::var(name).ok());
        Ok(cfg)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load_file() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Replace file values with any set environment variables.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.base_url = base_url;
        }
        if let Some(api_key) = lookup(API_KEY_ENV) {
            self.api_key = api_key;
        }
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Configured history file, or `history.json` in the platform data dir.
    pub fn history_file_path(&self) -> Result<PathBuf> {
        match &self.history_file {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_dir().join("history.json")),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "citycast", "citycast")
        .ok_or_else(|| anyhow!("Could not determine platform config directory"))
}
