//! Raw-handle processing: the tool owns all I/O on an opened target.

use std::io::{self, BufRead, Write};

use crate::files::{ProcessError, Stdio, open_file_or_stdin};
use crate::signal::SignalGuard;

use super::processor::FilenameProcessor;

/// Consumes an opened target.
pub trait HandleTransform {
    /// Processes `handle`, opened from `filename`, writing any output to `stdout`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error; the pipeline reports it against `filename`.
    fn process_file_handle(
        &mut self,
        filename: &str,
        handle: &mut dyn BufRead,
        stdout: &mut dyn Write,
        guard: &SignalGuard,
    ) -> io::Result<()>;
}

impl<F> HandleTransform for F
where
    F: FnMut(&str, &mut dyn BufRead, &mut dyn Write) -> io::Result<()>,
{
    fn process_file_handle(
        &mut self,
        filename: &str,
        handle: &mut dyn BufRead,
        stdout: &mut dyn Write,
        _guard: &SignalGuard,
    ) -> io::Result<()> {
        self(filename, handle, stdout)
    }
}

/// Opens each target (stdin for `-`) and hands it to a [`HandleTransform`].
#[derive(Debug, Clone)]
pub struct HandleProcessor<T> {
    transform: T,
}

impl<T: HandleTransform> HandleProcessor<T> {
    /// Creates a processor around `transform`.
    #[must_use]
    pub const fn new(transform: T) -> Self {
        Self { transform }
    }

    /// The wrapped transform.
    #[must_use]
    pub const fn transform(&self) -> &T {
        &self.transform
    }
}

impl<T: HandleTransform> FilenameProcessor for HandleProcessor<T> {
    fn process_filename(
        &mut self,
        filename: &str,
        stdio: &mut dyn Stdio,
        guard: &SignalGuard,
    ) -> Result<(), ProcessError> {
        let (stdin, stdout) = stdio.split();
        let mut input = open_file_or_stdin(filename, stdin)?;

        self.transform
            .process_file_handle(filename, &mut input, stdout, guard)
            .map_err(|source| ProcessError::Handle {
                path: filename.into(),
                source,
            })
    }
}

/// Builds a [`HandleProcessor`] from a closure.
pub const fn handle<F>(transform: F) -> HandleProcessor<F>
where
    F: FnMut(&str, &mut dyn BufRead, &mut dyn Write) -> io::Result<()>,
{
    HandleProcessor::new(transform)
}
