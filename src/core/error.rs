//! Domain error types
//!
//! An include that cannot be found is not an error and never shows up here.
//! These variants cover the conditions that abort a query.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that terminate a dependency query
#[derive(Debug, Error)]
pub enum DepsError {
    /// The root source file handed to a command does not exist.
    #[error("File {} does not exist", .0.display())]
    SourceNotFound(PathBuf),

    /// A file was located on disk but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Modification time of a discovered file could not be queried.
    #[error("Failed to read metadata of {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_source_not_found_message() {
        let err = DepsError::SourceNotFound(PathBuf::from("main.cpp"));
        assert_eq!(err.to_string(), "File main.cpp does not exist");
    }

    #[test]
    fn test_unreadable_keeps_source() {
        let err = DepsError::Unreadable {
            path: PathBuf::from("/inc/a.h"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/inc/a.h"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_metadata_message() {
        let err = DepsError::Metadata {
            path: PathBuf::from("x.h"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "Failed to read metadata of x.h: gone");
    }
}
