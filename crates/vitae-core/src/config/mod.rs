//! Project configuration (`vitae.toml`)
//!
//! The configuration file is optional. It is searched for in the starting
//! directory and its parents; relative paths inside it are resolved against
//! the directory that contains it.

mod model;

pub use model::{Config, RenderConfig};

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Configuration file name
pub const CONFIG_FILE: &str = "vitae.toml";

/// A directory containing vitae.toml, with its parsed configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Find project root by searching for vitae.toml upwards from `start`
    pub fn find_root(start: &Path) -> Result<Option<Self>> {
        for dir in start.ancestors() {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                log::debug!("Found {}", candidate.display());
                let config = Config::from_file(&candidate)?;
                return Ok(Some(Self {
                    root: dir.to_path_buf(),
                    config,
                }));
            }
        }
        Ok(None)
    }

    /// Resolve a path from the configuration against the project root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Configured template file, resolved
    pub fn template_path(&self) -> Option<PathBuf> {
        self.config.render.template.as_deref().map(|p| self.resolve(p))
    }

    /// Configured output file, resolved
    pub fn output_path(&self) -> Option<PathBuf> {
        self.config.render.output.as_deref().map(|p| self.resolve(p))
    }
}
