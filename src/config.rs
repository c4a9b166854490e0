//! Blog configuration.
//!
//! An optional `config.toml` in the blog directory:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! manifest_file = "posts.json"  # Manifest location, relative to the blog root
//! cache_enabled = true          # Reuse parsed posts within a session
//! ```
//!
//! A missing file means stock defaults. Unknown keys are rejected to
//! catch typos early.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Name of the config file within the blog directory.
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Engine configuration, sparse on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogConfig {
    /// Manifest location, relative to the blog root.
    pub manifest_file: String,
    /// When false, every post view re-fetches and re-parses its source.
    pub cache_enabled: bool,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            manifest_file: "posts.json".to_string(),
            cache_enabled: true,
        }
    }
}

impl BlogConfig {
    /// Load from `<dir>/config.toml`, falling back to defaults when the
    /// file does not exist. A present-but-malformed file is an error.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manifest_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "manifest_file must not be empty".into(),
            ));
        }
        Ok(())
    }
}
