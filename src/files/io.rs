//! Open, read and write a target that is either a file or a standard stream.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use super::error::ProcessError;
use super::filenames::is_stdio;

/// A readable target: borrowed standard input or an opened file.
pub enum Input<'a> {
    /// Standard input, borrowed from the caller's streams.
    Stdin(&'a mut dyn BufRead),
    /// A file opened for reading.
    File(BufReader<File>),
}

impl std::fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin(_) => f.write_str("Input::Stdin"),
            Self::File(file) => f.debug_tuple("Input::File").field(file.get_ref()).finish(),
        }
    }
}

impl Read for Input<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Stdin(stdin) => stdin.read(buf),
            Self::File(file) => file.read(buf),
        }
    }
}

impl BufRead for Input<'_> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Self::Stdin(stdin) => stdin.fill_buf(),
            Self::File(file) => file.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Self::Stdin(stdin) => stdin.consume(amt),
            Self::File(file) => file.consume(amt),
        }
    }
}

/// Maps a read failure on `filename` to the matching error variant.
pub(crate) fn read_error(filename: &str, source: io::Error) -> ProcessError {
    if is_stdio(filename) {
        ProcessError::Stdin(source)
    } else {
        ProcessError::Read {
            path: filename.into(),
            source,
        }
    }
}

/// Opens `filename` for reading; `-` borrows `stdin`.
///
/// # Errors
///
/// Returns [`ProcessError::Open`] if the file cannot be opened.
pub fn open_file_or_stdin<'a>(
    filename: &str,
    stdin: &'a mut dyn BufRead,
) -> Result<Input<'a>, ProcessError> {
    if is_stdio(filename) {
        return Ok(Input::Stdin(stdin));
    }

    let file = File::open(filename).map_err(|source| ProcessError::Open {
        path: filename.into(),
        source,
    })?;
    Ok(Input::File(BufReader::new(file)))
}

/// Reads the whole of `filename` as text; `-` reads all of `stdin`.
///
/// A file is read up to the size it had when probed, just before opening.
/// A file growing in the meantime is read short; one shrinking is read to
/// its new end.
///
/// # Errors
///
/// Returns [`ProcessError::Open`] if the file is missing or cannot be opened,
/// [`ProcessError::Read`] / [`ProcessError::Stdin`] if reading fails or the
/// content is not valid UTF-8.
pub fn read_file_or_stdin(filename: &str, stdin: &mut dyn BufRead) -> Result<String, ProcessError> {
    if is_stdio(filename) {
        let mut contents = String::new();
        stdin
            .read_to_string(&mut contents)
            .map_err(ProcessError::Stdin)?;
        return Ok(contents);
    }

    let path = Path::new(filename);
    let open_error = |source: io::Error| ProcessError::Open {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(open_error)?.len();
    let file = File::open(path).map_err(open_error)?;

    let mut contents = String::with_capacity(usize::try_from(size).unwrap_or_default());
    file.take(size)
        .read_to_string(&mut contents)
        .map_err(|source| ProcessError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(contents)
}

/// Prints `contents` to `stdout` followed by a newline, then flushes.
///
/// Each printed target ends with its own line break, so output from
/// consecutive targets never runs together.
///
/// # Errors
///
/// Returns [`ProcessError::Stdout`] if standard output fails (including a
/// broken pipe).
pub fn print_contents(contents: &str, stdout: &mut dyn Write) -> Result<(), ProcessError> {
    stdout
        .write_all(contents.as_bytes())
        .and_then(|()| stdout.write_all(b"\n"))
        .and_then(|()| stdout.flush())
        .map_err(ProcessError::Stdout)
}

/// Writes `contents` to `filename`, replacing it; `-` prints to `stdout`.
///
/// Files receive `contents` verbatim; stdout gets it through
/// [`print_contents`].
///
/// # Errors
///
/// Returns [`ProcessError::Write`] if the file cannot be written,
/// [`ProcessError::Stdout`] if standard output fails (including a broken pipe).
pub fn write_to_file_or_stdout(
    filename: &str,
    contents: &str,
    stdout: &mut dyn Write,
) -> Result<(), ProcessError> {
    if is_stdio(filename) {
        return print_contents(contents, stdout);
    }

    fs::write(filename, contents).map_err(|source| ProcessError::Write {
        path: filename.into(),
        source,
    })
}
