use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::document::DEFAULT_LAYOUT;
use crate::error::{Result, VitaeError};

/// vitae.toml schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Builtin or user layout name
    #[serde(default = "default_layout")]
    pub layout: String,
    /// Template file, relative to vitae.toml; wins over `layout`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
    /// Output file, relative to vitae.toml; stdout when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            template: None,
            output: None,
        }
    }
}

fn default_layout() -> String {
    DEFAULT_LAYOUT.to_string()
}

impl Config {
    /// Read vitae.toml
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;

        toml::from_str(&content).map_err(|e| VitaeError::ConfigParseError(e.to_string()))
    }

    /// Write vitae.toml
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| VitaeError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content)?;

        Ok(())
    }
}
