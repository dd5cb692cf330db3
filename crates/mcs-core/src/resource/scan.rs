//! Discover partial content files by listing a resource directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::partial::PartialContentName;
use crate::error::{ResourceError, Result};

/// A partial content file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialContentEntry {
    pub name: PartialContentName,
    pub path: PathBuf,
}

/// Lists partial content files in `resource_dir`, sorted by `(offset, sequence)`.
///
/// Entries whose names are not in the partial format (content files, temp
/// files) and anything that is not a regular file are skipped. A missing
/// directory has no partial files.
pub fn list_partial_contents(resource_dir: &Path) -> Result<Vec<PartialContentEntry>> {
    let read_dir = match fs::read_dir(resource_dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(ResourceError::io(resource_dir, e)),
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| ResourceError::io(resource_dir, e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str().and_then(PartialContentName::parse) else {
            continue;
        };
        let file_type = entry
            .file_type()
            .map_err(|e| ResourceError::io(entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }
        entries.push(PartialContentEntry {
            name,
            path: entry.path(),
        });
    }
    entries.sort_by_key(|e| e.name);
    Ok(entries)
}
