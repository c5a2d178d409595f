//! Line-by-line processing.

use std::io::BufRead;

use crate::files::{ProcessError, Stdio, open_file_or_stdin, read_error};
use crate::signal::SignalGuard;

use super::processor::FilenameProcessor;

/// What to do with one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    /// Write this text to stdout (usually the line, possibly rewritten).
    Emit(String),
    /// Write nothing for this line.
    Suppress,
}

impl From<(bool, String)> for LineAction {
    fn from((should_emit, line): (bool, String)) -> Self {
        if should_emit {
            Self::Emit(line)
        } else {
            Self::Suppress
        }
    }
}

/// Decides, line by line, what reaches stdout.
pub trait LineTransform {
    /// Handles `line`, which still carries its terminator (if it had one).
    fn process_line(&mut self, filename: &str, line: &str) -> LineAction;
}

impl<F> LineTransform for F
where
    F: FnMut(&str, &str) -> LineAction,
{
    fn process_line(&mut self, filename: &str, line: &str) -> LineAction {
        self(filename, line)
    }
}

/// Streams a target line by line through a [`LineTransform`].
///
/// Line terminators are preserved; emitted text is written as returned.
#[derive(Debug, Clone)]
pub struct LineProcessor<T> {
    transform: T,
}

impl<T: LineTransform> LineProcessor<T> {
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

impl<T: LineTransform> FilenameProcessor for LineProcessor<T> {
    fn process_filename(
        &mut self,
        filename: &str,
        stdio: &mut dyn Stdio,
        guard: &SignalGuard,
    ) -> Result<(), ProcessError> {
        let (stdin, stdout) = stdio.split();
        let mut input = open_file_or_stdin(filename, stdin)?;
        let mut line = String::new();

        loop {
            if !guard.keep_going() {
                tracing::debug!("Stop requested, leaving {filename} early");
                break;
            }

            line.clear();
            let read = input
                .read_line(&mut line)
                .map_err(|source| read_error(filename, source))?;
            if read == 0 {
                break;
            }

            if let LineAction::Emit(text) = self.transform.process_line(filename, &line) {
                stdout
                    .write_all(text.as_bytes())
                    .map_err(ProcessError::Stdout)?;
            }
        }

        stdout.flush().map_err(ProcessError::Stdout)
    }
}

/// Builds a [`LineProcessor`] from a closure.
pub const fn lines<F>(transform: F) -> LineProcessor<F>
where
    F: FnMut(&str, &str) -> LineAction,
{
    LineProcessor::new(transform)
}
