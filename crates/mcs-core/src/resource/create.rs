//! Allocate a fresh partial content file in a resource directory.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::partial::PartialContentName;
use super::scan::list_partial_contents;
use super::{checked_offset, ResourceLayout};
use crate::checkout::checkout_directory;
use crate::error::{ResourceError, Result};

/// An empty partial content file that was just created on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialContentFile {
    pub name: PartialContentName,
    pub path: PathBuf,
}

impl ResourceLayout {
    /// Creates an empty partial content file at `offset` in the resource
    /// directory named `resource_name`, checking the directory out first.
    ///
    /// The sequence is one past the highest sequence already present in the
    /// directory (at any offset), starting at 0. The file is created with
    /// `create_new`, so two writers never end up with the same file; the loser
    /// moves on to the next sequence. Every lost race means that sequence is
    /// taken, so the loop ends; `SequenceExhausted` only after `u64::MAX`.
    pub fn create_partial_content_file(
        &self,
        resource_name: &str,
        offset: i64,
    ) -> Result<PartialContentFile> {
        let offset = checked_offset(offset)?;
        let dir = self.resource_path_with_name(resource_name)?;
        checkout_directory(&dir)?;

        let mut sequence = next_sequence(&dir)?;
        while let Some(seq) = sequence {
            let name = PartialContentName::new(offset, seq);
            let path = dir.join(name.encode());
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => {
                    tracing::debug!(
                        path = %path.display(),
                        offset,
                        sequence = seq,
                        "created partial content file"
                    );
                    return Ok(PartialContentFile { name, path });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    sequence = seq.checked_add(1);
                }
                Err(e) => return Err(ResourceError::io(path, e)),
            }
        }
        Err(ResourceError::SequenceExhausted { dir })
    }
}

fn next_sequence(dir: &Path) -> Result<Option<u64>> {
    let highest = list_partial_contents(dir)?
        .iter()
        .map(|e| e.name.sequence)
        .max();
    Ok(match highest {
        None => Some(0),
        Some(seq) => seq.checked_add(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const KEY: &str = "https://ex.com/a.mp4";

    #[test]
    fn first_file_gets_sequence_zero() {
        let root = tempfile::tempdir().unwrap();
        let layout = ResourceLayout::new(root.path());
        let resource = layout.resource_name(KEY).unwrap();

        let created = layout.create_partial_content_file(&resource, 512).unwrap();
        assert_eq!(created.name, PartialContentName::new(512, 0));
        assert!(created.path.is_file());
        assert_eq!(created.path, layout.partial_content_path(KEY, 512, 0).unwrap());
    }

    #[test]
    fn same_offset_twice_yields_distinct_sequences() {
        let root = tempfile::tempdir().unwrap();
        let layout = ResourceLayout::new(root.path());
        let resource = layout.resource_name(KEY).unwrap();

        let a = layout.create_partial_content_file(&resource, 0).unwrap();
        let b = layout.create_partial_content_file(&resource, 0).unwrap();
        let c = layout.create_partial_content_file(&resource, 4096).unwrap();
        assert_ne!(a.path, b.path);
        assert_eq!(a.name.sequence, 0);
        assert_eq!(b.name.sequence, 1);
        assert_eq!(c.name, PartialContentName::new(4096, 2));
    }

    #[test]
    fn existing_files_are_never_reused() {
        let root = tempfile::tempdir().unwrap();
        let layout = ResourceLayout::new(root.path());
        let resource = layout.resource_name(KEY).unwrap();
        let dir = layout.checkout_resource_directory(KEY).unwrap();
        let existing = dir.join(PartialContentName::new(0, 41).encode());
        fs::write(&existing, b"keep").unwrap();

        let created = layout.create_partial_content_file(&resource, 0).unwrap();
        assert_eq!(created.name.sequence, 42);
        assert_eq!(fs::read(&existing).unwrap(), b"keep");
    }

    #[test]
    fn exhausted_sequence_is_reported() {
        let root = tempfile::tempdir().unwrap();
        let layout = ResourceLayout::new(root.path());
        let resource = layout.resource_name(KEY).unwrap();
        let dir = layout.checkout_resource_directory(KEY).unwrap();
        fs::write(dir.join(PartialContentName::new(0, u64::MAX).encode()), b"").unwrap();

        assert!(matches!(
            layout.create_partial_content_file(&resource, 0),
            Err(ResourceError::SequenceExhausted { .. })
        ));
    }

    #[test]
    fn negative_offset_is_rejected_before_io() {
        let root = tempfile::tempdir().unwrap();
        let layout = ResourceLayout::new(root.path());
        let resource = layout.resource_name(KEY).unwrap();

        assert!(matches!(
            layout.create_partial_content_file(&resource, -5),
            Err(ResourceError::InvalidOffset { offset: -5 })
        ));
        assert!(!root.path().join(&resource).exists());
    }
}
