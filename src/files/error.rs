//! Error type for reading and writing processing targets.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for file and stream operations during processing.
///
/// I/O failures are not retried; they propagate to the caller.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to open (or probe) a file for reading.
    #[error("Failed to open '{}': {source}", path.display())]
    Open {
        /// Path that could not be opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to read an opened file.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to rewrite a file.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to read standard input.
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    /// Failed to write standard output.
    #[error("Failed to write standard output: {0}")]
    Stdout(#[source] io::Error),

    /// A tool's own handle processing failed.
    #[error("Failed to process '{}': {source}", path.display())]
    Handle {
        /// Target being processed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl ProcessError {
    /// The underlying I/O error.
    #[must_use]
    pub const fn io_error(&self) -> &io::Error {
        match self {
            Self::Open { source, .. }
            | Self::Read { source, .. }
            | Self::Write { source, .. }
            | Self::Handle { source, .. }
            | Self::Stdin(source)
            | Self::Stdout(source) => source,
        }
    }

    /// Returns `true` if the reader on the other end of an output pipe is gone.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        self.io_error().kind() == io::ErrorKind::BrokenPipe
    }

    /// Returns `true` if a target did not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_error().kind() == io::ErrorKind::NotFound
    }
}
