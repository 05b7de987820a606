//! Include directive parsing
//!
//! Extracts the targets of `#include "..."` (user) and `#include <...>`
//! (system) directives from source text. Only directives that start a line,
//! modulo leading whitespace, are recognized; nothing is preprocessed.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;

use crate::core::error::DepsError;
use crate::core::file_reader::read_source;
use crate::core::model::{ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};

/// Static regex for user include directives
/// Format: #include "name.h"
pub static USER_INCLUDE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*#include[ \t]*"([^"\r\n]+)""#).expect("Invalid USER_INCLUDE_RE regex")
});

/// Static regex for system include directives
/// Format: #include <name>
pub static SYSTEM_INCLUDE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*#include[ \t]*<([^>\r\n]+)>"#).expect("Invalid SYSTEM_INCLUDE_RE regex")
});

fn collect_targets(re: &Regex, source: &str) -> BTreeSet<String> {
    re.captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parse the distinct user header targets of `source`
pub fn parse_user_headers(source: &str) -> BTreeSet<String> {
    collect_targets(&USER_INCLUDE_RE, source)
}

/// Parse the distinct system header targets of `source`
pub fn parse_system_headers(source: &str) -> BTreeSet<String> {
    collect_targets(&SYSTEM_INCLUDE_RE, source)
}

/// List the include targets written in a single file
pub fn list_includes(path: &Path, with_system: bool) -> Result<ResultSet, DepsError> {
    if !path.is_file() {
        return Err(DepsError::SourceNotFound(path.to_path_buf()));
    }

    let text = read_source(path)?;

    let mut result_set: ResultSet = parse_user_headers(&text.content)
        .into_iter()
        .map(ResultItem::include)
        .collect();

    if with_system {
        result_set.extend(
            parse_system_headers(&text.content)
                .into_iter()
                .map(ResultItem::system),
        );
    }

    result_set.sort();
    Ok(result_set)
}

/// Run the includes command
pub fn run_includes(path: &Path, with_system: bool, config: RenderConfig) -> Result<()> {
    let result_set = list_includes(path, with_system)?;

    let renderer = Renderer::with_config(config);
    renderer.print(&result_set);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Kind;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"// sample translation unit
#include <iostream>
#include "some_header.h"
   #include <also_included>
	#include "still_included.h"
#include <also_included.h>
#include "some_header.h"
// #include "commented_out.h"
int x; #include "not_at_line_start.h"
#include some_header_without_quotes.h
#include "unterminated.h
"#;

    #[test]
    fn test_parse_user_headers() {
        let headers = parse_user_headers(SAMPLE);
        let expected: BTreeSet<String> = ["some_header.h", "still_included.h"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(headers, expected);
    }

    #[test]
    fn test_parse_system_headers() {
        let headers = parse_system_headers(SAMPLE);
        let expected: BTreeSet<String> = ["iostream", "also_included", "also_included.h"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(headers, expected);
    }

    #[test]
    fn test_duplicates_collapse() {
        let source = "#include \"a.h\"\n#include \"a.h\"\n#include <a.h>\n#include \"a.h\"\n";
        assert_eq!(parse_user_headers(source).len(), 1);
        assert_eq!(parse_system_headers(source).len(), 1);
    }

    #[test]
    fn test_relative_components_kept_verbatim() {
        let headers = parse_user_headers("#include \"../common/util.h\"\n");
        assert!(headers.contains("../common/util.h"));
    }

    #[test]
    fn test_no_space_after_directive() {
        let headers = parse_user_headers("#include\"tight.h\"\n");
        assert!(headers.contains("tight.h"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let headers = parse_user_headers("#include \"a.h\"\r\n#include \"b.h\"\r\n");
        assert_eq!(headers.len(), 2);
        assert!(headers.contains("a.h"));
    }

    #[test]
    fn test_empty_source() {
        assert!(parse_user_headers("").is_empty());
        assert!(parse_system_headers("").is_empty());
    }

    #[test]
    fn test_list_includes_user_only() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("main.cpp");
        fs::write(&file, SAMPLE).unwrap();

        let result = list_includes(&file, false).unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.items.iter().all(|i| i.kind == Kind::Include));
    }

    #[test]
    fn test_list_includes_with_system() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("main.cpp");
        fs::write(&file, SAMPLE).unwrap();

        let result = list_includes(&file, true).unwrap();
        assert_eq!(result.len(), 5);
        assert_eq!(result.items[0].kind, Kind::Include);
        assert_eq!(result.items[4].kind, Kind::System);
    }

    #[test]
    fn test_list_includes_missing_file() {
        let temp = tempdir().unwrap();
        let err = list_includes(&temp.path().join("nope.cpp"), false).unwrap_err();
        assert!(matches!(err, DepsError::SourceNotFound(_)));
    }
}
