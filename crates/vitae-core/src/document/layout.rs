//! Layout resolution for document generation

use crate::error::{Result, VitaeError};
use crate::template::Template;
use std::path::Path;

/// File name of a layout template inside a layout directory
pub const LAYOUT_FILE: &str = "resume.tmp.tex";

/// Layout structure holding the document template
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Layout name (builtin name, directory name or file stem)
    pub name: String,
    /// Template source for the whole document
    pub template: String,
}

impl Layout {
    /// Create a new layout with name and template source
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }

    /// Load a layout from a single template file
    ///
    /// The name is the file name without `.tmp.tex` (or its last extension).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let template = std::fs::read_to_string(path).map_err(|e| {
            VitaeError::LayoutInvalid(format!(
                "Failed to read template at {}: {}",
                path.display(),
                e
            ))
        })?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("custom");
        let name = file_name
            .strip_suffix(".tmp.tex")
            .or_else(|| file_name.rsplit_once('.').map(|(stem, _)| stem))
            .unwrap_or(file_name);

        Ok(Self::new(name, template))
    }

    /// Check the template strictly
    pub fn validate(&self) -> Result<()> {
        Template::compile(&self.template)?;
        Ok(())
    }
}

/// Resolve layout by name
///
/// Resolution order:
/// 1. User layout in `<root>/layouts/<name>/resume.tmp.tex`
/// 2. Builtin layout
///
/// Returns error if layout not found in either location.
pub fn resolve_layout(root: &Path, name: &str) -> Result<Layout> {
    let user_layout = root.join("layouts").join(name).join(LAYOUT_FILE);
    if user_layout.is_file() {
        log::debug!("Using user layout '{}' at {}", name, user_layout.display());
        let mut layout = Layout::from_file(&user_layout)?;
        layout.name = name.to_string();
        return Ok(layout);
    }

    log::debug!("Using builtin layout '{}'", name);
    super::builtin_layouts::get_builtin_layout(name)
        .ok_or_else(|| VitaeError::LayoutNotFound(name.to_string()))
}

/// Names of the user layouts under `<root>/layouts`, sorted
///
/// A directory counts only if it contains a `resume.tmp.tex`.
pub fn user_layout_names(root: &Path) -> Result<Vec<String>> {
    let layouts_dir = root.join("layouts");
    if !layouts_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(&layouts_dir)? {
        let entry = entry?;
        if !entry.path().join(LAYOUT_FILE).is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}
