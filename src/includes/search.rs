//! Include path search
//!
//! Locates an include target on disk: the including file's directory first,
//! then each search directory in the order given.

use std::path::{Path, PathBuf};

use tracing::trace;

/// Canonical path of `dir/name` if it names an existing file
fn probe(dir: &Path, name: &Path) -> Option<PathBuf> {
    let candidate = dir.join(name);
    if !candidate.is_file() {
        return None;
    }
    candidate.canonicalize().ok()
}

/// Search the current directory, then the list of search directories, for
/// `name`. Returns the canonical path of the first hit, or `None` when no
/// location has it.
///
/// The current directory always wins over every search directory. An
/// absolute `name` is only ever looked up as-is.
pub fn search_include_path(
    name: impl AsRef<Path>,
    cur_dir: &Path,
    search_dirs: &[PathBuf],
) -> Option<PathBuf> {
    let name = name.as_ref();

    if let Some(found) = probe(cur_dir, name) {
        return Some(found);
    }

    let found = search_dirs.iter().find_map(|dir| probe(dir, name));
    if found.is_none() {
        trace!(name = %name.display(), "include not found on search path");
    }
    found
}
