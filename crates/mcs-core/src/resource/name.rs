//! Content file name validation.
//!
//! Unlike download filenames, cache file names are never rewritten: a name
//! that could leave the resource directory is a caller bug and is rejected.

use super::partial::PartialContentName;
use crate::error::{ResourceError, Result};

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Checks that `name` is a single, plain path component.
///
/// - Rejects empty names, `.` and `..`
/// - Rejects `/`, `\`, NUL and any `..` sequence
/// - Rejects names longer than 255 bytes
pub(crate) fn validate_component(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name == "." || name.contains("..") {
        "name contains a traversal sequence"
    } else if name.contains(['/', '\\']) {
        "name contains a path separator"
    } else if name.contains('\0') {
        "name contains NUL"
    } else if name.len() > NAME_MAX {
        "name is longer than 255 bytes"
    } else {
        return Ok(());
    };
    Err(invalid(name, reason))
}

/// Checks a content file name. On top of [`validate_component`], names in the
/// partial content format are reserved.
pub fn validate_content_name(name: &str) -> Result<()> {
    validate_component(name)?;
    if PartialContentName::parse(name).is_some() {
        return Err(invalid(name, "name is reserved for partial content"));
    }
    Ok(())
}

fn invalid(name: &str, reason: &'static str) -> ResourceError {
    ResourceError::InvalidName {
        name: name.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(name: &str) -> &'static str {
        match validate_content_name(name) {
            Err(ResourceError::InvalidName { reason, .. }) => reason,
            other => panic!("expected InvalidName for {name:?}, got {other:?}"),
        }
    }

    #[test]
    fn accepts_plain_names() {
        assert!(validate_content_name("video.mp4").is_ok());
        assert!(validate_content_name("index.m3u8").is_ok());
        assert!(validate_content_name(".hidden").is_ok());
    }

    #[test]
    fn rejects_traversal() {
        assert_eq!(reason("../escape"), "name contains a traversal sequence");
        assert_eq!(reason(".."), "name contains a traversal sequence");
        assert_eq!(reason("."), "name contains a traversal sequence");
    }

    #[test]
    fn rejects_separators_and_nul() {
        assert_eq!(reason("a/b"), "name contains a path separator");
        assert_eq!(reason("a\\b"), "name contains a path separator");
        assert_eq!(reason("a\0b"), "name contains NUL");
    }

    #[test]
    fn rejects_empty_and_overlong() {
        assert_eq!(reason(""), "name is empty");
        assert_eq!(reason(&"x".repeat(256)), "name is longer than 255 bytes");
        assert!(validate_content_name(&"x".repeat(255)).is_ok());
    }

    #[test]
    fn partial_names_are_reserved() {
        let partial = PartialContentName::new(0, 1).encode();
        assert_eq!(reason(&partial), "name is reserved for partial content");
        assert!(validate_component(&partial).is_ok());
    }
}
