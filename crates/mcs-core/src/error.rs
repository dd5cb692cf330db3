//! Error type shared by path derivation and directory checkout.

use std::path::PathBuf;

/// Failure from deriving or staging a cache path.
///
/// Naming errors (`InvalidKey`, `InvalidName`, `InvalidOffset`) mean the caller
/// passed something unusable and must not be retried. `Io` is the only
/// variant that may succeed on a later attempt.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("invalid URL key: {reason}")]
    InvalidKey { reason: &'static str },

    #[error("invalid file name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("invalid offset {offset}: must not be negative")]
    InvalidOffset { offset: i64 },

    /// Something other than a directory occupies `path` (or one of its ancestors).
    #[error("path conflict: {} exists and is not a directory", path.display())]
    PathConflict { path: PathBuf },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no free partial content sequence left in {}", dir.display())]
    SequenceExhausted { dir: PathBuf },
}

impl ResourceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ResourceError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when a later attempt could succeed (transient disk or permission issue).
    pub fn is_retryable(&self) -> bool {
        matches!(self, ResourceError::Io { .. })
    }
}

pub type Result<T, E = ResourceError> = std::result::Result<T, E>;
