//! The interface every processing strategy implements.

use crate::command::ParsedArgs;
use crate::files::{Filenames, ProcessError, Stdio};
use crate::signal::SignalGuard;

/// Processes one target at a time.
pub trait FilenameProcessor {
    /// Processes `filename` (`-` for the standard streams).
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] if the target cannot be read or written.
    fn process_filename(
        &mut self,
        filename: &str,
        stdio: &mut dyn Stdio,
        guard: &SignalGuard,
    ) -> Result<(), ProcessError>;

    /// Chooses the filenames to process; override to filter or expand them.
    fn filenames(&self, args: &ParsedArgs) -> Filenames {
        args.filenames().clone()
    }
}

impl<P: FilenameProcessor + ?Sized> FilenameProcessor for Box<P> {
    fn process_filename(
        &mut self,
        filename: &str,
        stdio: &mut dyn Stdio,
        guard: &SignalGuard,
    ) -> Result<(), ProcessError> {
        (**self).process_filename(filename, stdio, guard)
    }

    fn filenames(&self, args: &ParsedArgs) -> Filenames {
        (**self).filenames(args)
    }
}

/// Runs `processor` over every filename, stopping at the first error.
///
/// # Errors
///
/// Returns the first [`ProcessError`]; later filenames are not processed.
pub fn process_all<P: FilenameProcessor + ?Sized>(
    processor: &mut P,
    args: &ParsedArgs,
    stdio: &mut dyn Stdio,
    guard: &SignalGuard,
) -> Result<(), ProcessError> {
    let filenames = processor.filenames(args);

    for filename in filenames.iter() {
        if !guard.keep_going() {
            tracing::debug!("Stop requested, skipping remaining files");
            break;
        }

        tracing::debug!("Processing {filename}");
        processor.process_filename(filename, stdio, guard)?;
    }

    Ok(())
}
