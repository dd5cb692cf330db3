//! URL key validation and resource directory naming.

use sha2::{Digest, Sha256};

use crate::error::{ResourceError, Result};

/// Length of a resource name: hex-encoded SHA-256.
pub const RESOURCE_NAME_LEN: usize = 64;

/// A URL key that passed validation. Borrowed from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UrlKey<'a>(&'a str);

impl<'a> UrlKey<'a> {
    /// Validates `key` without altering it.
    ///
    /// Rejects empty keys, NUL bytes and any `..` path segment. Keys are
    /// hashed before touching the filesystem, so this only catches caller bugs;
    /// nothing is sanitized away.
    pub fn new(key: &'a str) -> Result<Self> {
        if key.is_empty() {
            return Err(ResourceError::InvalidKey {
                reason: "key is empty",
            });
        }
        if key.contains('\0') {
            return Err(ResourceError::InvalidKey {
                reason: "key contains NUL",
            });
        }
        if key.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(ResourceError::InvalidKey {
                reason: "key contains a `..` path segment",
            });
        }
        Ok(UrlKey(key))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Directory component for this key: lowercase hex SHA-256 of the key bytes.
    pub fn resource_name(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        hex::encode(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_traversal() {
        assert!(matches!(
            UrlKey::new(""),
            Err(ResourceError::InvalidKey { .. })
        ));
        assert!(matches!(
            UrlKey::new("https://ex.com/../etc/passwd"),
            Err(ResourceError::InvalidKey { .. })
        ));
        assert!(matches!(
            UrlKey::new(".."),
            Err(ResourceError::InvalidKey { .. })
        ));
        assert!(matches!(
            UrlKey::new("a\0b"),
            Err(ResourceError::InvalidKey { .. })
        ));
    }

    #[test]
    fn dots_inside_segment_are_fine() {
        assert!(UrlKey::new("https://ex.com/a..b.mp4").is_ok());
        assert!(UrlKey::new("https://ex.com/a.mp4").is_ok());
    }

    #[test]
    fn resource_name_is_sha256_hex() {
        let key = UrlKey::new("abc").unwrap();
        assert_eq!(
            key.resource_name(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn resource_name_differs_per_key() {
        let a = UrlKey::new("https://ex.com/a.mp4").unwrap().resource_name();
        let b = UrlKey::new("https://ex.com/b.mp4").unwrap().resource_name();
        assert_ne!(a, b);
        assert_eq!(a.len(), RESOURCE_NAME_LEN);
    }
}
