//! Tests for whole-contents processing.

use tempfile::TempDir;

use super::contents::{ContentsProcessor, ContentsTransform, WriteStrategy, in_place, printing};
use super::processor::FilenameProcessor;
use crate::files::BufferedStdio;
use crate::signal::SignalGuard;

/// Helper to create a file in a temp dir
fn file_with(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn upper(contents: &str) -> String {
    contents.to_uppercase()
}

fn unchanged(contents: &str) -> String {
    contents.to_string()
}

mod in_place_strategy {
    use super::*;

    #[test]
    fn changed_file_is_rewritten() {
        let dir = TempDir::new().unwrap();
        let path = file_with(&dir, "a.txt", "abc");
        let mut stdio = BufferedStdio::default();

        in_place(upper)
            .process_filename(&path, &mut stdio, &SignalGuard::new())
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ABC");
        assert!(stdio.output_bytes().is_empty());
    }

    #[test]
    fn unchanged_file_is_not_written() {
        let dir = TempDir::new().unwrap();
        let path = file_with(&dir, "a.txt", "abc");
        let mut stdio = BufferedStdio::default();

        // Root ignores write permissions, so compare modification times.
        let before = std::fs::metadata(&path).unwrap().modified().unwrap();
        in_place(unchanged)
            .process_filename(&path, &mut stdio, &SignalGuard::new())
            .unwrap();
        let after = std::fs::metadata(&path).unwrap().modified().unwrap();

        assert_eq!(before, after);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "abc");
        assert!(stdio.output_bytes().is_empty());
    }

    #[test]
    fn stdin_changed_goes_to_stdout() {
        let mut stdio = BufferedStdio::new("abc");

        in_place(upper)
            .process_filename("-", &mut stdio, &SignalGuard::new())
            .unwrap();

        assert_eq!(stdio.output_str(), "ABC\n");
    }

    #[test]
    fn stdin_unchanged_writes_nothing() {
        let mut stdio = BufferedStdio::new("abc");

        in_place(unchanged)
            .process_filename("-", &mut stdio, &SignalGuard::new())
            .unwrap();

        assert!(stdio.output_bytes().is_empty());
    }

    #[test]
    fn missing_file_propagates_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        let mut stdio = BufferedStdio::default();

        let error = in_place(upper)
            .process_filename(path.to_str().unwrap(), &mut stdio, &SignalGuard::new())
            .unwrap_err();

        assert!(error.is_not_found());
    }
}

mod printing_strategy {
    use super::*;

    #[test]
    fn changed_file_printed_and_untouched() {
        let dir = TempDir::new().unwrap();
        let path = file_with(&dir, "a.txt", "abc");
        let mut stdio = BufferedStdio::default();

        printing(upper)
            .process_filename(&path, &mut stdio, &SignalGuard::new())
            .unwrap();

        assert_eq!(stdio.output_str(), "ABC\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "abc");
    }

    #[test]
    fn consecutive_files_print_on_separate_lines() {
        let dir = TempDir::new().unwrap();
        let first = file_with(&dir, "a.txt", "abc");
        let second = file_with(&dir, "b.txt", "def");
        let mut processor = printing(upper);
        let mut stdio = BufferedStdio::default();
        let guard = SignalGuard::new();

        processor.process_filename(&first, &mut stdio, &guard).unwrap();
        processor.process_filename(&second, &mut stdio, &guard).unwrap();

        assert_eq!(stdio.output_str(), "ABC\nDEF\n");
    }

    #[test]
    fn unchanged_file_prints_nothing() {
        let dir = TempDir::new().unwrap();
        let path = file_with(&dir, "a.txt", "abc");
        let mut stdio = BufferedStdio::default();

        printing(unchanged)
            .process_filename(&path, &mut stdio, &SignalGuard::new())
            .unwrap();

        assert!(stdio.output_bytes().is_empty());
    }

    #[test]
    fn stdin_changed_printed() {
        let mut stdio = BufferedStdio::new("abc\n");

        printing(upper)
            .process_filename("-", &mut stdio, &SignalGuard::new())
            .unwrap();

        assert_eq!(stdio.output_str(), "ABC\n\n");
    }
}

mod custom_transform {
    use super::*;

    /// Counts how many times it was called
    struct Counting {
        calls: usize,
    }

    impl ContentsTransform for Counting {
        fn process_contents(&mut self, contents: &str) -> String {
            self.calls += 1;
            format!("{contents}!")
        }
    }

    #[test]
    fn struct_transform_is_invoked_per_target() {
        let dir = TempDir::new().unwrap();
        let a = file_with(&dir, "a.txt", "a");
        let b = file_with(&dir, "b.txt", "b");
        let mut processor =
            ContentsProcessor::new(Counting { calls: 0 }, WriteStrategy::PrintIfChanged);
        let mut stdio = BufferedStdio::default();
        let guard = SignalGuard::new();

        processor.process_filename(&a, &mut stdio, &guard).unwrap();
        processor.process_filename(&b, &mut stdio, &guard).unwrap();

        assert_eq!(processor.transform().calls, 2);
        assert_eq!(processor.write_strategy(), WriteStrategy::PrintIfChanged);
        assert_eq!(stdio.output_str(), "a!\nb!\n");
    }
}
