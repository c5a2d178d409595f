//! Tests for line-by-line processing.

use tempfile::TempDir;

use super::lines::{LineAction, LineProcessor, LineTransform, lines};
use super::processor::FilenameProcessor;
use crate::files::BufferedStdio;
use crate::signal::SignalGuard;

fn shout(_filename: &str, line: &str) -> LineAction {
    LineAction::Emit(line.to_uppercase())
}

#[test]
fn every_line_emitted_with_terminators() {
    let mut stdio = BufferedStdio::new("a\nb\n");

    lines(shout)
        .process_filename("-", &mut stdio, &SignalGuard::new())
        .unwrap();

    assert_eq!(stdio.output_str(), "A\nB\n");
}

#[test]
fn suppressed_line_dropped_alone() {
    let mut stdio = BufferedStdio::new("keep\ndrop\nkeep too\n");

    lines(|_: &str, line: &str| {
        if line.starts_with("drop") {
            LineAction::Suppress
        } else {
            LineAction::Emit(line.to_string())
        }
    })
    .process_filename("-", &mut stdio, &SignalGuard::new())
    .unwrap();

    assert_eq!(stdio.output_str(), "keep\nkeep too\n");
}

#[test]
fn last_line_without_terminator_kept() {
    let mut stdio = BufferedStdio::new("a\r\nb");

    lines(|_: &str, line: &str| LineAction::Emit(format!("[{line}]")))
        .process_filename("-", &mut stdio, &SignalGuard::new())
        .unwrap();

    assert_eq!(stdio.output_str(), "[a\r\n][b]");
}

#[test]
fn tuple_converts_to_action() {
    assert_eq!(
        LineAction::from((true, "x".to_string())),
        LineAction::Emit("x".to_string())
    );
    assert_eq!(LineAction::from((false, "x".to_string())), LineAction::Suppress);
}

#[test]
fn file_lines_receive_filename() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("in.txt");
    std::fs::write(&path, "one\ntwo\n").unwrap();
    let path = path.to_str().unwrap().to_string();
    let mut stdio = BufferedStdio::default();

    lines(|filename: &str, line: &str| LineAction::Emit(format!("{}:{line}", filename.len())))
        .process_filename(&path, &mut stdio, &SignalGuard::new())
        .unwrap();

    let expected = format!("{n}:one\n{n}:two\n", n = path.len());
    assert_eq!(stdio.output_str(), expected);
}

#[test]
fn stop_request_ends_iteration() {
    struct StopAfterFirst {
        guard: SignalGuard,
    }

    impl LineTransform for StopAfterFirst {
        fn process_line(&mut self, _filename: &str, line: &str) -> LineAction {
            self.guard.request_stop();
            LineAction::Emit(line.to_string())
        }
    }

    let guard = SignalGuard::new();
    let mut processor = LineProcessor::new(StopAfterFirst {
        guard: guard.clone(),
    });
    let mut stdio = BufferedStdio::new("1\n2\n3\n");

    processor.process_filename("-", &mut stdio, &guard).unwrap();

    assert_eq!(stdio.output_str(), "1\n");
    assert!(!processor.transform().guard.keep_going());
}

#[test]
fn missing_file_propagates_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");
    let mut stdio = BufferedStdio::default();

    let error = lines(shout)
        .process_filename(path.to_str().unwrap(), &mut stdio, &SignalGuard::new())
        .unwrap_err();

    assert!(error.is_not_found());
}
