//! Path utilities
//!
//! Normalizes paths for output and turns the delimited INCLUDE_PATH string
//! into an ordered list of search directories.

use std::path::{Path, PathBuf};

/// Default delimiter between entries of an include path list
pub const DEFAULT_SEPARATOR: char = ';';

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Split a delimited include path list into search directories.
///
/// Order is preserved. Empty entries (`"a;;b"`, a trailing `;`) are dropped,
/// and surrounding whitespace is trimmed from each entry.
pub fn split_search_path(list: &str, separator: char) -> Vec<PathBuf> {
    list.split(separator)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Directory containing `file`, used as the current directory for its includes
pub fn containing_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
