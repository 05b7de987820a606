//! User header closure
//!
//! Computes every user header reachable from a file through `#include "..."`
//! directives. Each resolved path is opened at most once per query: it is
//! marked visited before it is read, so include cycles terminate.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::core::error::DepsError;
use crate::core::file_reader::read_source;
use crate::core::paths::containing_dir;
use crate::includes::parse::parse_user_headers;
use crate::includes::search::search_include_path;

/// Outcome of a top-level closure query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderClosure {
    /// Canonical path of the queried file, if it could be located
    pub root: Option<PathBuf>,

    /// Every user header reachable from the root
    pub headers: BTreeSet<PathBuf>,

    /// Number of distinct files opened while computing the closure
    pub files_scanned: usize,
}

/// Resolve the full closure of `source` with a fresh visited set.
pub fn resolve_closure(
    source: impl AsRef<Path>,
    cur_dir: &Path,
    search_dirs: &[PathBuf],
) -> Result<HeaderClosure, DepsError> {
    let source = source.as_ref();
    let mut visited = HashSet::new();

    let root = search_include_path(source, cur_dir, search_dirs);
    let headers = find_user_headers(source, cur_dir, search_dirs, &mut visited)?;

    Ok(HeaderClosure {
        root,
        headers,
        files_scanned: visited.len(),
    })
}

/// Find the user headers included by `file_base`, directly or transitively.
///
/// `file_base` is located through [`search_include_path`]; if it cannot be
/// found, or its resolved path is already in `visited`, the result is empty.
/// `visited` only grows and must not be shared between unrelated queries.
///
/// The queried file itself is left out of the result even when an include
/// cycle leads back to it, unless it includes itself directly.
pub fn find_user_headers(
    file_base: impl AsRef<Path>,
    cur_dir: &Path,
    search_dirs: &[PathBuf],
    visited: &mut HashSet<PathBuf>,
) -> Result<BTreeSet<PathBuf>, DepsError> {
    let mut headers = BTreeSet::new();

    let Some(root) = search_include_path(file_base, cur_dir, search_dirs) else {
        return Ok(headers);
    };

    collect(&root, &root, search_dirs, visited, &mut headers)?;
    Ok(headers)
}

fn collect(
    file: &Path,
    root: &Path,
    search_dirs: &[PathBuf],
    visited: &mut HashSet<PathBuf>,
    headers: &mut BTreeSet<PathBuf>,
) -> Result<(), DepsError> {
    // Mark before reading; a cycle back to this file stops here.
    if !visited.insert(file.to_path_buf()) {
        trace!(path = %file.display(), "already visited");
        return Ok(());
    }

    let text = read_source(file)?;
    let dir = containing_dir(file);

    let included: Vec<PathBuf> = parse_user_headers(&text.content)
        .iter()
        .filter_map(|target| search_include_path(target, &dir, search_dirs))
        .collect();

    debug!(path = %file.display(), includes = included.len(), "scanned");

    for path in &included {
        if path != root || file == root {
            headers.insert(path.clone());
        }
    }

    for path in &included {
        collect(path, root, search_dirs, visited, headers)?;
    }

    Ok(())
}
