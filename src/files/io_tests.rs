//! Tests for file-or-stdio reading and writing.

use std::io::{BufRead, Cursor};

use tempfile::TempDir;

use super::error::ProcessError;
use super::io::{
    Input, open_file_or_stdin, print_contents, read_file_or_stdin, write_to_file_or_stdout,
};

mod reading {
    use super::*;

    #[test]
    fn dash_reads_all_of_stdin() {
        let mut stdin = Cursor::new(b"one\ntwo\n".to_vec());

        let contents = read_file_or_stdin("-", &mut stdin).unwrap();

        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn path_reads_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "abc\ndef").unwrap();
        let mut stdin = Cursor::new(Vec::new());

        let contents = read_file_or_stdin(path.to_str().unwrap(), &mut stdin).unwrap();

        assert_eq!(contents, "abc\ndef");
    }

    #[test]
    fn empty_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();
        let mut stdin = Cursor::new(Vec::new());

        let contents = read_file_or_stdin(path.to_str().unwrap(), &mut stdin).unwrap();

        assert!(contents.is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        let mut stdin = Cursor::new(Vec::new());

        let error = read_file_or_stdin(path.to_str().unwrap(), &mut stdin).unwrap_err();

        assert!(matches!(error, ProcessError::Open { .. }));
        assert!(error.is_not_found());
        assert!(!error.is_broken_pipe());
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let mut stdin = Cursor::new(Vec::new());

        let error = read_file_or_stdin(path.to_str().unwrap(), &mut stdin).unwrap_err();

        assert!(matches!(error, ProcessError::Read { .. }));
    }
}

mod opening {
    use super::*;

    #[test]
    fn dash_borrows_stdin() {
        let mut stdin = Cursor::new(b"line\n".to_vec());

        let mut input = open_file_or_stdin("-", &mut stdin).unwrap();
        let mut line = String::new();
        input.read_line(&mut line).unwrap();

        assert!(matches!(input, Input::Stdin(_)));
        assert_eq!(line, "line\n");
    }

    #[test]
    fn path_opens_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "first\nsecond\n").unwrap();
        let mut stdin = Cursor::new(Vec::new());

        let input = open_file_or_stdin(path.to_str().unwrap(), &mut stdin).unwrap();
        let lines: Vec<_> = input.lines().map(Result::unwrap).collect();

        assert_eq!(lines, ["first", "second"]);
    }

    #[test]
    fn missing_file_fails_to_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        let mut stdin = Cursor::new(Vec::new());

        let error = open_file_or_stdin(path.to_str().unwrap(), &mut stdin).unwrap_err();

        assert!(error.is_not_found());
        assert!(error.to_string().contains("missing.txt"));
    }
}

mod writing {
    use super::*;

    #[test]
    fn dash_prints_with_trailing_newline() {
        let mut stdout = Vec::new();

        write_to_file_or_stdout("-", "no newline", &mut stdout).unwrap();

        assert_eq!(stdout, b"no newline\n");
    }

    #[test]
    fn printed_contents_keep_their_own_newline() {
        let mut stdout = Vec::new();

        print_contents("one\n", &mut stdout).unwrap();
        print_contents("two", &mut stdout).unwrap();

        assert_eq!(stdout, b"one\n\ntwo\n");
    }

    #[test]
    fn path_replaces_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old content that is longer").unwrap();
        let mut stdout = Vec::new();

        write_to_file_or_stdout(path.to_str().unwrap(), "new", &mut stdout).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert!(stdout.is_empty());
    }

    #[test]
    fn unwritable_path_is_a_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        let mut stdout = Vec::new();

        let error = write_to_file_or_stdout(path.to_str().unwrap(), "x", &mut stdout).unwrap_err();

        assert!(matches!(error, ProcessError::Write { .. }));
    }
}
