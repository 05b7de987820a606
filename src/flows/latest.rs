//! Latest flow - newest modification time among a source and its headers

use anyhow::Result;
use serde_json::json;
use std::path::{Path, PathBuf};

use crate::core::error::DepsError;
use crate::core::model::{ResultItem, ResultSet};
use crate::core::paths::{normalize_path, split_search_path};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::{format_ctime, format_rfc3339, get_mtime_ms};
use crate::flows::check::check_source;

/// The most recently modified file of a closure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestChange {
    /// File holding the newest timestamp
    pub path: PathBuf,

    /// Its modification time in milliseconds since epoch
    pub mtime_ms: i64,

    /// How many files were compared, root included
    pub files_considered: usize,
}

impl LatestChange {
    pub fn to_result_item(&self) -> ResultItem {
        ResultItem::timestamp(
            normalize_path(&self.path),
            format_ctime(self.mtime_ms),
            self.mtime_ms,
        )
        .with_data(json!({
            "rfc3339": format_rfc3339(self.mtime_ms),
            "files_considered": self.files_considered,
        }))
    }
}

/// Find the newest file among the closure of `source` and `source` itself
pub fn latest_change(source: &Path, search_dirs: &[PathBuf]) -> Result<LatestChange, DepsError> {
    let closure = check_source(source, search_dirs)?;

    let root = closure
        .root
        .ok_or_else(|| DepsError::SourceNotFound(source.to_path_buf()))?;

    let mut files = closure.headers;
    files.insert(root.clone());
    let files_considered = files.len();

    let mut newest = LatestChange {
        path: root,
        mtime_ms: i64::MIN,
        files_considered,
    };

    // Ties go to the path that sorts first.
    for path in files {
        let mtime_ms = get_mtime_ms(&path).map_err(|source| DepsError::Metadata {
            path: path.clone(),
            source,
        })?;
        if mtime_ms > newest.mtime_ms {
            newest.path = path;
            newest.mtime_ms = mtime_ms;
        }
    }

    Ok(newest)
}

/// Run the time command
pub fn run_latest(
    source: &Path,
    include_path: &str,
    separator: char,
    config: RenderConfig,
) -> Result<()> {
    let search_dirs = split_search_path(include_path, separator);
    let latest = latest_change(source, &search_dirs)?;

    let mut result_set = ResultSet::new();
    result_set.push(latest.to_result_item());

    let renderer = Renderer::with_config(config);
    renderer.print(&result_set);

    Ok(())
}
