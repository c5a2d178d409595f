//! Whole-contents processing.

use crate::files::{
    ProcessError, Stdio, print_contents, read_file_or_stdin, write_to_file_or_stdout,
};
use crate::signal::SignalGuard;

use super::processor::FilenameProcessor;

/// Transforms the entire contents of a target at once.
pub trait ContentsTransform {
    /// Returns the new contents.
    fn process_contents(&mut self, contents: &str) -> String;
}

impl<F> ContentsTransform for F
where
    F: FnMut(&str) -> String,
{
    fn process_contents(&mut self, contents: &str) -> String {
        self(contents)
    }
}

/// Where changed contents go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStrategy {
    /// Rewrite the target itself; `-` prints to stdout.
    InPlaceIfChanged,
    /// Print to stdout, one line break after each target; the target is left
    /// untouched.
    PrintIfChanged,
}

/// Reads a whole target, transforms it, and writes it only if it changed.
#[derive(Debug, Clone)]
pub struct ContentsProcessor<T> {
    transform: T,
    write: WriteStrategy,
}

impl<T: ContentsTransform> ContentsProcessor<T> {
    /// Creates a processor with the given write strategy.
    #[must_use]
    pub const fn new(transform: T, write: WriteStrategy) -> Self {
        Self { transform, write }
    }

    /// The write strategy in use.
    #[must_use]
    pub const fn write_strategy(&self) -> WriteStrategy {
        self.write
    }

    /// The wrapped transform.
    #[must_use]
    pub const fn transform(&self) -> &T {
        &self.transform
    }
}

impl<T: ContentsTransform> FilenameProcessor for ContentsProcessor<T> {
    fn process_filename(
        &mut self,
        filename: &str,
        stdio: &mut dyn Stdio,
        _guard: &SignalGuard,
    ) -> Result<(), ProcessError> {
        let (stdin, stdout) = stdio.split();
        let contents = read_file_or_stdin(filename, stdin)?;
        let new_contents = self.transform.process_contents(&contents);

        if new_contents == contents {
            tracing::debug!("Unchanged {filename}");
            return Ok(());
        }

        match self.write {
            WriteStrategy::InPlaceIfChanged => {
                tracing::debug!("Updated file {filename}");
                write_to_file_or_stdout(filename, &new_contents, stdout)
            }
            WriteStrategy::PrintIfChanged => {
                tracing::debug!("Printing file {filename}");
                print_contents(&new_contents, stdout)
            }
        }
    }
}

/// Rewrites each target with `transform` applied, when that changes it.
pub const fn in_place<F>(transform: F) -> ContentsProcessor<F>
where
    F: FnMut(&str) -> String,
{
    ContentsProcessor::new(transform, WriteStrategy::InPlaceIfChanged)
}

/// Prints each target with `transform` applied, when that changes it.
pub const fn printing<F>(transform: F) -> ContentsProcessor<F>
where
    F: FnMut(&str) -> String,
{
    ContentsProcessor::new(transform, WriteStrategy::PrintIfChanged)
}
