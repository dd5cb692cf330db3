//! Resource layout: where every cached artifact for a URL key lives.
//!
//! ```text
//! <cache_root>/
//!   <sha256(key) hex>/                      resource directory
//!     video.mp4                             content file
//!     00000000000000001024_00000000000000000003   partial content file
//! ```
//!
//! Path derivation is pure; only [`ResourceLayout::checkout_resource_directory`]
//! and [`ResourceLayout::create_partial_content_file`] touch the filesystem.

mod create;
mod key;
mod name;
mod partial;
mod scan;

pub use create::PartialContentFile;
pub use key::{UrlKey, RESOURCE_NAME_LEN};
pub use name::validate_content_name;
pub use partial::{PartialContentName, DELIMITER, ENCODED_LEN, FIELD_WIDTH};
pub use scan::{list_partial_contents, PartialContentEntry};

use std::path::{Path, PathBuf};

use crate::checkout::checkout_directory;
use crate::error::{ResourceError, Result};

/// Path derivation rooted at a single cache directory.
///
/// Holds no state besides the root, so it is cheap to clone and safe to
/// share between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLayout {
    root: PathBuf,
}

impl ResourceLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory component derived from `key`.
    pub fn resource_name(&self, key: &str) -> Result<String> {
        Ok(UrlKey::new(key)?.resource_name())
    }

    /// `<root>/<sha256(key)>`. Same key, same bytes, every time.
    pub fn resource_directory_path(&self, key: &str) -> Result<PathBuf> {
        Ok(self.root.join(self.resource_name(key)?))
    }

    /// Resource directory for an already-derived resource name.
    pub fn resource_path_with_name(&self, resource_name: &str) -> Result<PathBuf> {
        name::validate_component(resource_name)?;
        Ok(self.root.join(resource_name))
    }

    /// `<resource_directory>/<name>`. Fails with `InvalidName` if `name` could
    /// escape the directory or shadow a partial content file.
    pub fn content_file_path(&self, name: &str, resource_directory: &Path) -> Result<PathBuf> {
        validate_content_name(name)?;
        Ok(resource_directory.join(name))
    }

    /// Same as [`content_file_path`](Self::content_file_path) for callers that
    /// already hold the resource name instead of the key.
    pub fn content_file_path_in_resource(
        &self,
        name: &str,
        resource_name: &str,
    ) -> Result<PathBuf> {
        let dir = self.resource_path_with_name(resource_name)?;
        self.content_file_path(name, &dir)
    }

    /// `<resource_directory>/<offset>_<sequence>` with both fields zero padded.
    ///
    /// `sequence` is not checked for monotonicity; that is the caller's counter.
    pub fn partial_content_path(&self, key: &str, offset: i64, sequence: u64) -> Result<PathBuf> {
        let offset = checked_offset(offset)?;
        let dir = self.resource_directory_path(key)?;
        Ok(dir.join(PartialContentName::new(offset, sequence).encode()))
    }

    /// Derives the resource directory for `key` and makes sure it exists.
    pub fn checkout_resource_directory(&self, key: &str) -> Result<PathBuf> {
        let dir = self.resource_directory_path(key)?;
        checkout_directory(&dir)?;
        Ok(dir)
    }
}

pub(crate) fn checked_offset(offset: i64) -> Result<u64> {
    u64::try_from(offset).map_err(|_| ResourceError::InvalidOffset { offset })
}
