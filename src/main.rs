//! filecmd: regular expression substitution over files or standard input.
//!
//! Entry point for the filecmd application.

use std::process::ExitCode;

use filecmd::command::exit_code;

mod tool;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let base = match tool::command_base() {
        Ok(base) => base,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return exit_code::FAILURE;
        }
    };

    filecmd::pipeline::main(base, tool::build)
}
