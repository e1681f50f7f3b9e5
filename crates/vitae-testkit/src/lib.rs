//! Shared test helpers for the vitae crates
//!
//! - [`temp_dir_in_workspace`]: scratch directories under `.tmp/`
//! - [`fixtures`]: résumé records as JSON/TOML text

pub mod fixtures;

use std::path::PathBuf;
use tempfile::TempDir;

fn scratch_root() -> std::io::Result<PathBuf> {
    let root = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&root)?;
    Ok(root)
}

/// Fresh directory under `./.tmp/`, removed on drop
///
/// Tests that run the CLI use it as the working directory, so keeping it
/// inside the crate avoids picking up a stray `vitae.toml` from the system
/// temp directory's parents.
///
/// # Panics
///
/// Panics if the directory cannot be created.
///
/// ```rust
/// let temp = vitae_testkit::temp_dir_in_workspace();
/// std::fs::write(temp.path().join("resume.json"), "{}").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Fallible [`temp_dir_in_workspace`]
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    TempDir::new_in(scratch_root()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_is_under_dot_tmp() {
        let temp = temp_dir_in_workspace();
        assert!(temp.path().exists());
        assert_eq!(
            temp.path().parent().and_then(|p| p.file_name()),
            Some(std::ffi::OsStr::new(".tmp"))
        );
    }

    #[test]
    fn test_temp_dir_removed_on_drop() {
        let temp = try_temp_dir_in_workspace().unwrap();
        let path = temp.path().to_path_buf();
        drop(temp);
        assert!(!path.exists());
    }
}
