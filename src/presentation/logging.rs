//! Logging setup
//!
//! Logs go to stderr. `RUST_LOG` takes precedence; otherwise the level
//! follows the `-v` count.

use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .compact()
        .try_init()
        .ok();
}
