//! Diagnostic logging to stderr.
//!
//! `-v`/`-vv`/`-q` pick the default level; `RUST_LOG` directives, when set, win.

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Default level for the given verbosity flags.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, quiet).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
