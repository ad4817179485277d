//! Dispatcher settings
//!
//! Settings only shape how help and errors are presented. They are never a
//! source of option values: every option comes from the argument vector.
//!
//! ```toml
//! format = "json"
//!
//! [layout]
//! usage_prefix = "usage:"
//! indent = 4
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::output::OutputFormat;
use crate::command::HelpLayout;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    Parse(String),
}

/// Presentation settings for one dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Format of help and error output
    pub format: OutputFormat,

    /// Text layout of rendered help
    pub layout: HelpLayout,
}

impl Settings {
    /// Parses settings from TOML
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Loads settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))
    }

    /// Serializes settings to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize settings")
    }
}
