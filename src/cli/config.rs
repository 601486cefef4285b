//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default directory to scan
    pub dir: Option<PathBuf>,

    /// Editor command, used when neither $VISUAL nor $EDITOR is set
    pub editor: Option<String>,

    /// Picker command line (program followed by its flags)
    pub picker: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/mdheads/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mdheads")
            .join("config.toml")
    }

    /// Resolve the directory to scan, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--path` argument
    /// 2. Config file `dir` setting
    /// 3. Current working directory
    pub fn root_dir(&self, cli_path: Option<&PathBuf>) -> PathBuf {
        cli_path
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
