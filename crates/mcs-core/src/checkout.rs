//! Directory checkout: make sure a directory exists before writing into it.
//!
//! Safe to call on every write. Creation goes through `create_dir_all`, which
//! treats a directory created concurrently by someone else as success, so
//! racing callers never see an error for the same path.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ResourceError, Result};

/// Ensures `path` is an existing directory, creating it and any missing
/// ancestors.
///
/// Returns `PathConflict` if a non-directory occupies `path` or one of its
/// ancestors; the conflicting entry is left untouched.
pub fn checkout_directory(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => {
            return Err(ResourceError::PathConflict {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(classify_failure(path, e)),
    }

    match fs::create_dir_all(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "checked out directory");
            Ok(())
        }
        Err(e) => Err(classify_failure(path, e)),
    }
}

/// Maps a failed stat/mkdir to `PathConflict` when the namespace is occupied
/// by a non-directory, otherwise to `Io` with the original error.
fn classify_failure(path: &Path, err: std::io::Error) -> ResourceError {
    match occupied_by_non_directory(path) {
        Some(occupied) => ResourceError::PathConflict { path: occupied },
        None => ResourceError::io(path, err),
    }
}

/// First entry from `path` upwards that exists and is not a directory.
///
/// A symlink counts as existing even when dangling; it only passes if it
/// resolves to a directory.
fn occupied_by_non_directory(path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .find(|p| {
            fs::symlink_metadata(p).is_ok()
                && !fs::metadata(p).map(|meta| meta.is_dir()).unwrap_or(false)
        })
        .map(Path::to_path_buf)
}
