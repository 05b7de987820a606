//! Diagnostic logging setup
//!
//! Results go to stdout; everything emitted through `tracing` goes to stderr
//! so piping the output of a command stays clean.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "INCDEPS_LOG";

static INIT: Once = Once::new();

/// Default filter directive when `INCDEPS_LOG` is unset or invalid
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "incdeps=debug"
    } else {
        "incdeps=warn"
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .init();
    });
}
