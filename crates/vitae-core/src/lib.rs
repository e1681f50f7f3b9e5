// Core modules
pub mod config;
pub mod document;
pub mod error;
pub mod escape;
pub mod resume;
pub mod template;

// Re-export commonly used types
pub use document::{generate, generate_with, Layout, Section};
pub use error::{Result, VitaeError};
pub use escape::escape;
pub use resume::{load_resume, Resume};
