//! Configuration management for feedpost

use crate::error::{FeedError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Text of the comment every fresh thread starts with
pub const DEFAULT_SEED_COMMENT: &str = "Post muito bacana, heim?!";

/// Message shown when an empty comment is submitted
pub const DEFAULT_REQUIRED_MESSAGE: &str = "Esse campo é obrigatório!";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Post view settings
    pub view: ViewConfig,
    /// UI settings
    pub ui: UiConfig,
    /// Comment storage settings
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FeedError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration if the file exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No configuration at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check values that serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if self.view.required_message.trim().is_empty() {
            return Err(FeedError::Config(
                "view.required_message cannot be empty".to_string(),
            ));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(FeedError::Config(
                "ui.tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Post view configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Comment inserted into an empty thread; `None` or `""` starts empty
    pub seed_comment: Option<String>,
    /// Validation message for an empty submission
    pub required_message: String,
    /// Display name shown on comments written in this view
    pub commenter_name: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            seed_comment: Some(DEFAULT_SEED_COMMENT.to_string()),
            required_message: DEFAULT_REQUIRED_MESSAGE.to_string(),
            commenter_name: "Você".to_string(),
        }
    }
}

impl ViewConfig {
    /// The seed comment to insert, if any
    pub fn seed(&self) -> Option<&str> {
        self.seed_comment.as_deref().filter(|text| !text.is_empty())
    }
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme
    pub theme: String,
    /// Show the key hint line under the form
    pub show_help_hint: bool,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            show_help_hint: true,
            tick_rate_ms: 250,
        }
    }
}

/// Comment storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `post-<id>.json` thread files
    pub comments_dir: Option<PathBuf>,
}
