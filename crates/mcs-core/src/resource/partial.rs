//! Partial content file names: `<offset>_<sequence>`.
//!
//! Both fields are zero-padded to 20 decimal digits (enough for any `u64`), so
//! a plain lexicographic directory listing sorts partial files by offset, then
//! by sequence. Readers recover both values from the file name alone.

use std::fmt;

/// Separator between the offset and sequence fields. Never a digit.
pub const DELIMITER: char = '_';

/// Digits per field.
pub const FIELD_WIDTH: usize = 20;

/// Total length of an encoded partial content name.
pub const ENCODED_LEN: usize = FIELD_WIDTH * 2 + 1;

/// Decoded partial content file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartialContentName {
    /// Byte offset in the resource where this fragment starts.
    pub offset: u64,
    /// Arrival sequence; disambiguates fragments sharing an offset.
    pub sequence: u64,
}

impl PartialContentName {
    pub fn new(offset: u64, sequence: u64) -> Self {
        Self { offset, sequence }
    }

    /// Encodes as the file base name, e.g. `00000000000000001024_00000000000000000003`.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decodes a file base name. Returns `None` for anything that is not
    /// exactly two 20-digit fields around the delimiter.
    pub fn parse(file_name: &str) -> Option<Self> {
        if file_name.len() != ENCODED_LEN || !file_name.is_ascii() {
            return None;
        }
        let (offset, rest) = file_name.split_at(FIELD_WIDTH);
        let sequence = rest.strip_prefix(DELIMITER)?;
        Some(Self {
            offset: parse_field(offset)?,
            sequence: parse_field(sequence)?,
        })
    }
}

impl fmt::Display for PartialContentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0width$}{}{:0width$}",
            self.offset,
            DELIMITER,
            self.sequence,
            width = FIELD_WIDTH
        )
    }
}

fn parse_field(field: &str) -> Option<u64> {
    // `u64::from_str` would also accept a leading `+`.
    if field.len() != FIELD_WIDTH || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
