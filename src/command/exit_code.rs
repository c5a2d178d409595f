//! Process exit codes.

use std::process::ExitCode;

/// Success (exit code 0), also used for a second termination signal.
pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

/// I/O or tool configuration error (exit code 1).
pub const FAILURE: ExitCode = ExitCode::FAILURE;

/// The output reader went away (exit code 1).
pub const BROKEN_PIPE: ExitCode = ExitCode::FAILURE;

/// Malformed command line (exit code 2), matching `clap`'s own exits.
///
/// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
#[must_use]
pub fn usage() -> ExitCode {
    ExitCode::from(2)
}
