//! Tests for the signal guard.

use super::*;

mod flags {
    use super::*;

    #[test]
    fn new_guard_keeps_going() {
        let guard = SignalGuard::new();

        assert!(guard.keep_going());
        assert!(guard.pipe_ok());
        assert!(!guard.is_armed());
    }

    #[test]
    fn request_stop_flips_once() {
        let guard = SignalGuard::new();

        assert!(guard.request_stop());
        assert!(!guard.request_stop());
        assert!(!guard.keep_going());
    }

    #[test]
    fn clones_share_state() {
        let guard = SignalGuard::new();
        let observer = guard.clone();

        guard.request_stop();
        guard.mark_broken_pipe();

        assert!(!observer.keep_going());
        assert!(!observer.pipe_ok());
    }

    #[test]
    fn pipe_policy_defaults_to_quiet_exit() {
        let guard = SignalGuard::new();

        assert_eq!(guard.pipe_policy(), PipePolicy::ExitQuietly);
        assert_eq!(
            guard.with_pipe_policy(PipePolicy::DefaultAction).pipe_policy(),
            PipePolicy::DefaultAction
        );
    }

    #[test]
    fn quiet_policy_marks_pipe_and_returns() {
        let guard = SignalGuard::new().with_pipe_policy(PipePolicy::ExitQuietly);
        let observer = guard.clone();

        guard.on_broken_pipe();

        assert!(!observer.pipe_ok());
        assert_eq!(observer.pipe_policy(), PipePolicy::ExitQuietly);
    }

    #[test]
    fn broken_pipe_does_not_stop() {
        let guard = SignalGuard::default();

        guard.mark_broken_pipe();

        assert!(guard.keep_going());
        assert!(!guard.pipe_ok());
    }
}

#[cfg(unix)]
mod delivery {
    use super::*;
    use signal_hook::consts::SIGTERM;

    // Only this test may raise a signal in the test process: a second
    // delivery would exit the whole test binary.
    #[test]
    fn first_signal_clears_keep_going() {
        let guard = SignalGuard::new();
        guard.arm().unwrap();
        guard.arm().unwrap();
        assert!(guard.is_armed());

        signal_hook::low_level::raise(SIGTERM).unwrap();

        assert!(!guard.keep_going());
        assert!(guard.pipe_ok());
    }
}

#[cfg(unix)]
mod default_pipe_action {
    use std::os::unix::process::ExitStatusExt;
    use std::process::Command;

    use super::*;
    use signal_hook::consts::SIGPIPE;

    const CHILD_ENV: &str = "FILECMD_TEST_DIE_OF_SIGPIPE";

    /// Runs in a child copy of this test binary; a no-op otherwise.
    #[test]
    fn dies_in_child() {
        if std::env::var_os(CHILD_ENV).is_none() {
            return;
        }

        SignalGuard::new()
            .with_pipe_policy(PipePolicy::DefaultAction)
            .on_broken_pipe();
    }

    #[test]
    fn default_action_kills_with_sigpipe() {
        let status = Command::new(std::env::current_exe().unwrap())
            .args([
                "--exact",
                "signal::tests::default_pipe_action::dies_in_child",
                "--test-threads=1",
            ])
            .env(CHILD_ENV, "1")
            .output()
            .unwrap()
            .status;

        assert_eq!(status.signal(), Some(SIGPIPE));
    }
}
