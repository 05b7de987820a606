//! Common utilities

use chrono::{DateTime, Local, Utc};
use std::path::Path;
use std::time::SystemTime;

/// Layout of C `ctime()` without the trailing newline
pub const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Get file modification time in milliseconds since epoch
pub fn get_mtime_ms(path: &Path) -> std::io::Result<i64> {
    let metadata = std::fs::metadata(path)?;
    let mtime = metadata.modified()?;
    // Timestamps before the epoch come back negative.
    let ms = match mtime.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => duration.as_millis() as i64,
        Err(e) => -(e.duration().as_millis() as i64),
    };
    Ok(ms)
}

/// Render a millisecond timestamp the way `ctime()` does, in local time
pub fn format_ctime(mtime_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(mtime_ms) {
        Some(utc) => utc.with_timezone(&Local).format(CTIME_FORMAT).to_string(),
        None => mtime_ms.to_string(),
    }
}

/// Render a millisecond timestamp as RFC 3339 (UTC)
pub fn format_rfc3339(mtime_ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(mtime_ms).map(|utc| utc.to_rfc3339())
}
