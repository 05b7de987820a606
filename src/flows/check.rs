//! Check flow - list the user header closure of a source file

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::DepsError;
use crate::core::model::{ResultItem, ResultSet};
use crate::core::paths::{normalize_path, split_search_path};
use crate::core::render::{RenderConfig, Renderer};
use crate::includes::closure::{resolve_closure, HeaderClosure};

/// Resolve the closure of a root source file.
///
/// The root must exist; it is then looked up relative to the working
/// directory first, like any other include.
pub fn check_source(source: &Path, search_dirs: &[PathBuf]) -> Result<HeaderClosure, DepsError> {
    if !source.is_file() {
        return Err(DepsError::SourceNotFound(source.to_path_buf()));
    }

    let closure = resolve_closure(source, Path::new("."), search_dirs)?;
    debug!(
        source = %source.display(),
        headers = closure.headers.len(),
        scanned = closure.files_scanned,
        "resolved include closure"
    );
    Ok(closure)
}

/// Convert a closure to a ResultSet of header items
pub fn closure_to_result_set(closure: &HeaderClosure) -> ResultSet {
    let mut result_set: ResultSet = closure
        .headers
        .iter()
        .map(|path| ResultItem::header(normalize_path(path)))
        .collect();
    result_set.sort();
    result_set
}

/// Run the check command
pub fn run_check(
    source: &Path,
    include_path: &str,
    separator: char,
    config: RenderConfig,
) -> Result<()> {
    let search_dirs = split_search_path(include_path, separator);
    let closure = check_source(source, &search_dirs)?;

    let renderer = Renderer::with_config(config);
    renderer.print(&closure_to_result_set(&closure));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Kind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_check_source_missing() {
        let temp = tempdir().unwrap();
        let err = check_source(&temp.path().join("main.cpp"), &[]).unwrap_err();
        assert!(matches!(err, DepsError::SourceNotFound(_)));
    }

    #[test]
    fn test_check_source_directory_rejected() {
        let temp = tempdir().unwrap();
        let err = check_source(temp.path(), &[]).unwrap_err();
        assert!(matches!(err, DepsError::SourceNotFound(_)));
    }

    #[test]
    fn test_check_source_absolute_path() {
        let temp = tempdir().unwrap();
        let main = temp.path().join("main.cpp");
        fs::write(&main, "#include \"a.h\"\n").unwrap();
        fs::write(temp.path().join("a.h"), "").unwrap();

        let closure = check_source(&main, &[]).unwrap();
        assert_eq!(closure.headers.len(), 1);
        assert_eq!(closure.root, Some(main.canonicalize().unwrap()));
    }

    #[test]
    fn test_closure_to_result_set_sorted() {
        let mut closure = HeaderClosure::default();
        closure.headers.insert(PathBuf::from("/inc/z.h"));
        closure.headers.insert(PathBuf::from("/inc/a.h"));

        let result_set = closure_to_result_set(&closure);
        assert_eq!(result_set.len(), 2);
        assert!(result_set.items.iter().all(|i| i.kind == Kind::Header));
        assert_eq!(result_set.items[0].path.as_deref(), Some("/inc/a.h"));
    }
}
