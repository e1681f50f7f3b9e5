//! Reading résumés from disk

use super::Resume;
use crate::error::{Result, VitaeError};
use std::path::Path;

/// Serialized résumé formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Json,
    Toml,
}

impl ResumeFormat {
    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(VitaeError::ResumeFormatUnsupported(path.to_path_buf())),
        }
    }

    /// Parse résumé text in this format
    pub fn parse(self, content: &str) -> std::result::Result<Resume, String> {
        match self {
            Self::Json => Resume::from_json_str(content).map_err(|e| e.to_string()),
            Self::Toml => Resume::from_toml_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Load a résumé from a `.json` or `.toml` file
pub fn load_resume(path: impl AsRef<Path>) -> Result<Resume> {
    let path = path.as_ref();
    let format = ResumeFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;

    log::debug!("Loading {:?} resume from {}", format, path.display());

    format
        .parse(&content)
        .map_err(|reason| VitaeError::ResumeParseError {
            path: path.to_path_buf(),
            reason,
        })
}
