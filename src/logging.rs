//! Tracing setup shared by every tool.
//!
//! Logs go to stderr so stdout carries only tool output.

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Returns the default log level for the given verbosity.
#[must_use]
pub const fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}

/// Sets up the tracing subscriber for logging.
///
/// `RUST_LOG` refines the filter; `verbose` picks the default level.
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_selects_debug() {
        assert_eq!(default_level(true), Level::DEBUG);
        assert_eq!(default_level(false), Level::INFO);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_tracing(false);
        init_tracing(true);
    }
}
