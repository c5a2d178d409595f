//! Tool entry points: parse, build the processor, drive it, map the exit code.

use std::ffi::OsString;
use std::fmt::Display;
use std::process::ExitCode;

use thiserror::Error;

use crate::command::{CommandBase, ParsedArgs, exit_code};
use crate::files::{ProcessError, ProcessStdio, Stdio};
use crate::logging::init_tracing;
use crate::signal::SignalGuard;

use super::processor::{FilenameProcessor, process_all};

/// Error type for a tool run.
#[derive(Debug, Error)]
pub enum RunError {
    /// Malformed command line, or `--help` / `--version`.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// The tool rejected its configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing a target failed.
    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl RunError {
    /// Returns `true` if output stopped because its reader went away.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Process(e) if e.is_broken_pipe())
    }

    /// The process exit code this error maps to.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Usage(e) => u8::try_from(e.exit_code())
                .map_or_else(|_| exit_code::usage(), ExitCode::from),
            Self::Process(e) if e.is_broken_pipe() => exit_code::BROKEN_PIPE,
            Self::Config(_) | Self::Process(_) => exit_code::FAILURE,
        }
    }
}

/// Builds the processor from parsed arguments and runs it over every filename.
///
/// # Errors
///
/// Returns [`RunError::Config`] if `build` fails and [`RunError::Process`]
/// for the first I/O failure.
pub fn run_parsed<P, E, F>(
    args: &ParsedArgs,
    stdio: &mut dyn Stdio,
    guard: &SignalGuard,
    build: F,
) -> Result<(), RunError>
where
    P: FilenameProcessor,
    E: Display,
    F: FnOnce(&ParsedArgs) -> Result<P, E>,
{
    let mut processor = build(args).map_err(|e| RunError::Config(e.to_string()))?;
    process_all(&mut processor, args, stdio, guard)?;
    Ok(())
}

/// Parses `args`, then behaves like [`run_parsed`].
///
/// The filenames argument is registered on `base` before parsing.
///
/// # Errors
///
/// Returns [`RunError::Usage`] for malformed arguments, otherwise as
/// [`run_parsed`].
pub fn run_from<P, E, F, I, T>(
    base: CommandBase,
    args: I,
    stdio: &mut dyn Stdio,
    guard: &SignalGuard,
    build: F,
) -> Result<(), RunError>
where
    P: FilenameProcessor,
    E: Display,
    F: FnOnce(&ParsedArgs) -> Result<P, E>,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = base.with_filenames().try_parse_from(args)?;
    run_parsed(&args, stdio, guard, build)
}

/// Runs a tool as the process's main program.
///
/// Arms the signal guard, parses the process arguments (exiting on usage
/// errors), sets up logging, and drives the processor `build` returns over
/// the process's standard streams.
///
/// A broken output pipe ends the run silently with exit code 1; other
/// failures are logged and also exit with 1.
#[cfg(not(tarpaulin_include))]
pub fn main<P, E, F>(base: CommandBase, build: F) -> ExitCode
where
    P: FilenameProcessor,
    E: Display,
    F: FnOnce(&ParsedArgs) -> Result<P, E>,
{
    main_with(base, SignalGuard::new(), build)
}

/// Like [`main`], with a caller-configured guard (e.g. a different
/// [`PipePolicy`](crate::signal::PipePolicy)).
#[cfg(not(tarpaulin_include))]
pub fn main_with<P, E, F>(base: CommandBase, guard: SignalGuard, build: F) -> ExitCode
where
    P: FilenameProcessor,
    E: Display,
    F: FnOnce(&ParsedArgs) -> Result<P, E>,
{
    if let Err(e) = guard.arm() {
        eprintln!("Warning: failed to install signal handlers: {e}");
    }

    let args = base.with_filenames().parse_from(std::env::args_os());
    init_tracing(args.verbose());

    let mut stdio = ProcessStdio::new();
    let result = run_parsed(&args, &mut stdio, &guard, build);
    finish(result, &guard)
}

/// Maps a run result to an exit code, reporting failures.
pub(super) fn finish(result: Result<(), RunError>, guard: &SignalGuard) -> ExitCode {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) if e.is_broken_pipe() => {
            guard.on_broken_pipe();
            e.exit_code()
        }
        Err(RunError::Usage(e)) => e.exit(),
        Err(e) => {
            tracing::error!("{e}");
            e.exit_code()
        }
    }
}
