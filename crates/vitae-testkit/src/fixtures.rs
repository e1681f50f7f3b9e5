//! Résumé fixtures shared by the workspace tests
//!
//! Fixtures are plain JSON/TOML text so that any crate can parse them with its
//! own types.

use std::path::PathBuf;

/// Minimal résumé: name, email, phone and a single education entry
pub const JANE_DOE_JSON: &str = include_str!("../fixtures/jane_doe.json");

/// Every section populated, including reserved LaTeX characters in free text
pub const FULL_RESUME_JSON: &str = include_str!("../fixtures/full_resume.json");

/// Same record as [`FULL_RESUME_JSON`] in TOML
pub const FULL_RESUME_TOML: &str = include_str!("../fixtures/full_resume.toml");

/// Old input shape: skills as a category map, pre-joined `dates`, string
/// technologies, `null` certifications
pub const LEGACY_RESUME_JSON: &str = include_str!("../fixtures/legacy_resume.json");

/// Absolute path of a file in the fixtures directory
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}
