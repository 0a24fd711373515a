//! Idempotent directory creation.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::PathError;

/// What `ensure_directory` found (or did).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    /// The directory was absent and has been created.
    Created,
    /// The directory was already present; nothing was touched.
    AlreadyExisted,
}

/// Ensure `path` exists as a directory, creating it (and parents) if absent.
///
/// An existing directory is left alone. An existing non-directory is an error.
pub fn ensure_directory(path: &Path) -> Result<DirectoryState, PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }

    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        debug!(path = %path.display(), "directory already present");
        return Ok(DirectoryState::AlreadyExisted);
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), "created directory");
    Ok(DirectoryState::Created)
}
