//! Global context for CLI commands

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use vitae_core::config::Project;

/// Working directory plus the enclosing vitae.toml project, if any
pub struct Context {
    pub cwd: PathBuf,
    pub project: Option<Project>,
}

impl Context {
    /// Create a new context by searching for vitae.toml from the working directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The working directory cannot be determined
    /// - A vitae.toml is found but cannot be read or parsed
    pub fn new() -> Result<Self> {
        let cwd = env::current_dir()?;
        let project = Project::find_root(&cwd)?;

        match &project {
            Some(project) => log::debug!("Project root: {}", project.root.display()),
            None => log::debug!("No vitae.toml found from {}", cwd.display()),
        }

        Ok(Self { cwd, project })
    }

    /// Directory whose `layouts/` holds user layouts
    pub fn layout_root(&self) -> &Path {
        self.project
            .as_ref()
            .map(|project| project.root.as_path())
            .unwrap_or(self.cwd.as_path())
    }

    /// Layout name from vitae.toml, if a project was found
    pub fn configured_layout(&self) -> Option<&str> {
        self.project
            .as_ref()
            .map(|project| project.config.render.layout.as_str())
    }
}
