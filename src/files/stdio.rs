//! Standard stream access.
//!
//! Processors read stdin and write stdout through the [`Stdio`] trait, so
//! tools can be exercised against in-memory buffers.

use std::io::{self, BufRead, Cursor, StdinLock, StdoutLock, Write};

/// Standard input and output as seen by a processor.
///
/// # Example
///
/// ```
/// use std::io::{BufRead, Write};
/// use filecmd::files::{BufferedStdio, Stdio};
///
/// let mut stdio = BufferedStdio::new("hello\n");
/// let (input, output) = stdio.split();
/// let mut line = String::new();
/// input.read_line(&mut line).unwrap();
/// output.write_all(line.to_uppercase().as_bytes()).unwrap();
///
/// assert_eq!(stdio.output_str(), "HELLO\n");
/// ```
pub trait Stdio {
    /// Borrows both streams at once.
    fn split(&mut self) -> (&mut dyn BufRead, &mut dyn Write);
}

/// The process's own standard streams, locked for the lifetime of the value.
pub struct ProcessStdio {
    stdin: StdinLock<'static>,
    stdout: StdoutLock<'static>,
}

impl ProcessStdio {
    /// Locks the process's stdin and stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout().lock(),
        }
    }
}

impl Default for ProcessStdio {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProcessStdio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessStdio").finish_non_exhaustive()
    }
}

impl Stdio for ProcessStdio {
    fn split(&mut self) -> (&mut dyn BufRead, &mut dyn Write) {
        (&mut self.stdin, &mut self.stdout)
    }
}

/// In-memory streams: a fixed input and a growable output buffer.
#[derive(Debug, Default)]
pub struct BufferedStdio {
    input: Cursor<Vec<u8>>,
    output: Vec<u8>,
}

impl BufferedStdio {
    /// Creates streams whose input is `input`.
    #[must_use]
    pub fn new(input: impl Into<Vec<u8>>) -> Self {
        Self {
            input: Cursor::new(input.into()),
            output: Vec::new(),
        }
    }

    /// Bytes written to output so far.
    #[must_use]
    pub fn output_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Output decoded as UTF-8, with invalid sequences replaced.
    #[must_use]
    pub fn output_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.output)
    }
}

impl Stdio for BufferedStdio {
    fn split(&mut self) -> (&mut dyn BufRead, &mut dyn Write) {
        (&mut self.input, &mut self.output)
    }
}
