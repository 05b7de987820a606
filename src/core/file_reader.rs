//! Source file reading
//!
//! Headers in the wild carry Latin-1 comments or stray bytes, so content is
//! decoded lossily instead of rejected. Only I/O failures are errors.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::core::error::DepsError;

/// Text of a source file, decoded for directive scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// The decoded file content
    pub content: String,

    /// Whether invalid UTF-8 sequences were replaced
    pub lossy_conversion: bool,
}

impl SourceText {
    /// Decode raw bytes, replacing invalid UTF-8 sequences
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(content) => Self {
                content,
                lossy_conversion: false,
            },
            Err(err) => Self {
                content: String::from_utf8_lossy(err.as_bytes()).into_owned(),
                lossy_conversion: true,
            },
        }
    }
}

/// Read the whole file into memory.
///
/// The handle is released before this returns.
pub fn read_source(path: &Path) -> Result<SourceText, DepsError> {
    let bytes = fs::read(path).map_err(|source| DepsError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let text = SourceText::from_bytes(bytes);
    if text.lossy_conversion {
        warn!(path = %path.display(), "invalid UTF-8 replaced while reading");
    }
    Ok(text)
}
