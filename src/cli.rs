//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::paths::DEFAULT_SEPARATOR;
use crate::core::render::{OutputFormat, RenderConfig};

/// incdeps - discover the user headers a C/C++ source file depends on.
#[derive(Parser, Debug)]
#[command(name = "incdeps")]
#[command(
    author,
    version,
    about,
    long_about = r#"incdeps statically scans `#include "..."` directives to find every user header
a source file depends on, directly or transitively. No compiler or preprocessor
is invoked. System headers (`#include <...>`) are never resolved.

Each include is looked up in the directory of the file that includes it first,
then in each INCLUDE_PATH entry in order. Include cycles are followed once.

Examples:
    incdeps check src/main.cpp "include;third_party/include"
    incdeps time src/main.cpp "include"
    incdeps includes src/main.cpp --system
    incdeps --format jsonl check src/main.cpp "include"
"#
)]
pub struct Cli {
    /// Output format (lines/jsonl/json/md).
    #[arg(
        long,
        global = true,
        default_value = "lines",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- lines (default): one absolute path per line\n\
- jsonl: one JSON object per line\n\
- json: a single JSON array\n\
- md (markdown)"
    )]
    pub format: OutputFormat,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
Has no effect on lines/md formats."
    )]
    pub pretty: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Log each scanned file and the closure summary to stderr.\n\n\
INCDEPS_LOG takes precedence when set (e.g. INCDEPS_LOG=incdeps=trace)."
    )]
    pub verbose: bool,

    /// Delimiter between INCLUDE_PATH entries.
    #[arg(
        long,
        global = true,
        env = "INCDEPS_SEPARATOR",
        default_value_t = DEFAULT_SEPARATOR,
        value_name = "CHAR"
    )]
    pub separator: char,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every user header a source file depends on.
    #[command(
        long_about = "Resolve the transitive closure of user headers included by SOURCE and\n\
print one absolute path per line, sorted.\n\n\
Headers that cannot be found in any searched directory are skipped silently.\n\n\
Examples:\n\
  incdeps check src/main.cpp \"include;lib/include\"\n\
  INCDEPS_INCLUDE_PATH=include incdeps check src/main.cpp\n"
    )]
    Check {
        /// Source file to analyze.
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Delimited list of directories to search for includes, in order.
        #[arg(value_name = "INCLUDE_PATH", env = "INCDEPS_INCLUDE_PATH")]
        include_path: String,
    },

    /// Print the newest modification time among a source file and its headers.
    #[command(
        long_about = "Resolve the same closure as `check`, add SOURCE itself, and print the most\n\
recent modification time among those files in ctime format.\n\n\
With --format jsonl/json the item also names the newest file.\n\n\
Example:\n\
  incdeps time src/main.cpp \"include\"\n"
    )]
    Time {
        /// Source file to analyze.
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Delimited list of directories to search for includes, in order.
        #[arg(value_name = "INCLUDE_PATH", env = "INCDEPS_INCLUDE_PATH")]
        include_path: String,
    },

    /// List the include targets written in a single file.
    #[command(
        long_about = "Parse FILE and print the distinct targets of its `#include \"...\"`\n\
directives, without resolving them.\n\n\
Examples:\n\
  incdeps includes src/main.cpp\n\
  incdeps includes src/main.cpp --system\n"
    )]
    Includes {
        /// File to parse.
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Also list `#include <...>` targets.
        #[arg(long)]
        system: bool,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let render_config = RenderConfig::with_pretty(cli.format, cli.pretty);

    match cli.command {
        Commands::Check {
            source,
            include_path,
        } => crate::flows::check::run_check(&source, &include_path, cli.separator, render_config),

        Commands::Time {
            source,
            include_path,
        } => {
            crate::flows::latest::run_latest(&source, &include_path, cli.separator, render_config)
        }

        Commands::Includes { file, system } => {
            crate::includes::parse::run_includes(&file, system, render_config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["incdeps", "check", "main.cpp", "inc;lib"]).unwrap();
        match cli.command {
            Commands::Check {
                source,
                include_path,
            } => {
                assert_eq!(source, PathBuf::from("main.cpp"));
                assert_eq!(include_path, "inc;lib");
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.separator, ';');
        assert_eq!(cli.format, OutputFormat::Lines);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "incdeps",
            "time",
            "main.cpp",
            "inc",
            "--format",
            "jsonl",
            "--separator",
            ":",
            "-v",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Time { .. }));
        assert_eq!(cli.format, OutputFormat::Jsonl);
        assert_eq!(cli.separator, ':');
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_includes_system() {
        let cli = Cli::try_parse_from(["incdeps", "includes", "main.cpp", "--system"]).unwrap();
        assert!(matches!(cli.command, Commands::Includes { system: true, .. }));
    }

    #[test]
    fn test_unknown_format_is_usage_error() {
        let err = Cli::try_parse_from(["incdeps", "--format", "xml", "check", "a.cpp", "inc"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_missing_source_is_usage_error() {
        assert!(Cli::try_parse_from(["incdeps", "check"]).is_err());
    }
}
