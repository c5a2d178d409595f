//! Filename resolution and file-or-stdio primitives.
//!
//! The token `-` stands for standard input when reading and standard output
//! when writing. Every other token is a filesystem path.

mod error;
mod filenames;
mod io;
mod stdio;

#[cfg(test)]
mod io_tests;

pub use error::ProcessError;
pub use filenames::{Filenames, STDIO_MARK, is_stdio};
pub(crate) use io::read_error;
pub use io::{
    Input, open_file_or_stdin, print_contents, read_file_or_stdin, write_to_file_or_stdout,
};
pub use stdio::{BufferedStdio, ProcessStdio, Stdio};
