// ABOUTME: Utility functions for the m2s application
// ABOUTME: Provides path validation and output path helpers

use crate::errors::{M2sError, Result};
use std::path::{Path, PathBuf};

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(M2sError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(M2sError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a file's parent directory exists, creating it if necessary
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent).map_err(|source| M2sError::FileWriteError {
                path: parent.to_path_buf(),
                source,
            })
        }
        Some(parent) if parent.exists() && !parent.is_dir() => Err(M2sError::ValidationError(
            format!("Path exists but is not a directory: {:?}", parent),
        )),
        _ => Ok(()),
    }
}

/// Output path used when none is given: the input with its extension replaced by `.html`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_output_replaces_extension() {
        assert_eq!(
            default_output_path(Path::new("talks/deck.md")),
            PathBuf::from("talks/deck.html")
        );
        assert_eq!(
            default_output_path(Path::new("slides")),
            PathBuf::from("slides.html")
        );
        assert_eq!(
            default_output_path(Path::new("notes.v2.markdown")),
            PathBuf::from("notes.v2.html")
        );
    }

    #[test]
    fn missing_file_is_path_not_found() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let missing = dir.path().join("nope.md");
        assert!(matches!(
            validate_file_exists(&missing),
            Err(M2sError::PathNotFoundError(p)) if p == missing
        ));
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        assert!(matches!(
            validate_file_exists(dir.path()),
            Err(M2sError::ValidationError(_))
        ));
    }

    #[test]
    fn parent_directories_are_created() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let target = dir.path().join("a/b/out.html");
        ensure_parent_directory_exists(&target).unwrap();
        assert!(dir.path().join("a/b").is_dir());
        assert!(ensure_parent_directory_exists(Path::new("bare.html")).is_ok());
    }
}
