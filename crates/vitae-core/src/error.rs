use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitaeError {
    // Resume errors
    #[error("RESUME_PARSE_ERROR: failed to parse resume '{path}': {reason}")]
    ResumeParseError { path: PathBuf, reason: String },

    #[error("RESUME_FORMAT_UNSUPPORTED: '{0}' is neither .json nor .toml")]
    ResumeFormatUnsupported(PathBuf),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: failed to parse vitae.toml: {0}")]
    ConfigParseError(String),

    // Layout errors
    #[error("LAYOUT_NOT_FOUND: layout '{0}' not found")]
    LayoutNotFound(String),

    #[error("LAYOUT_INVALID: {0}")]
    LayoutInvalid(String),

    // Template errors
    #[error("TEMPLATE_INVALID: {0}")]
    TemplateInvalid(#[from] crate::template::TemplateError),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VitaeError>;
