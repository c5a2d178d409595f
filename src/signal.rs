//! Termination signal handling and cooperative cancellation.
//!
//! A [`SignalGuard`] is the cancellation context shared between the signal
//! handlers and the processing loop:
//!
//! - The first termination signal (`SIGINT`, `SIGTERM`, `SIGQUIT` on Unix)
//!   clears [`SignalGuard::keep_going`]; loops poll it between units of work.
//! - A second one while the first is still pending exits the process
//!   immediately with status 0.
//! - A vanished output reader is not a signal here: the Rust runtime ignores
//!   `SIGPIPE`, so writes fail with `BrokenPipe`. The pipeline records that
//!   with [`SignalGuard::on_broken_pipe`] and, under the default
//!   [`PipePolicy`], exits quietly with status 1.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use signal_hook::consts::TERM_SIGNALS;
use signal_hook::flag;

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;

/// Exit status used when a second termination signal arrives.
pub const SECOND_SIGNAL_EXIT_STATUS: i32 = 0;

/// What a run does once its output reader has gone away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PipePolicy {
    /// Stop writing and exit with status 1, printing nothing.
    #[default]
    ExitQuietly,
    /// Die of `SIGPIPE`, as a process with the default disposition would.
    ///
    /// Only available on Unix; elsewhere this behaves like `ExitQuietly`.
    DefaultAction,
}

/// Cancellation context fed by termination signals and broken pipes.
///
/// Clones share state.
#[derive(Debug, Clone)]
pub struct SignalGuard {
    stop: Arc<AtomicBool>,
    pipe_ok: Arc<AtomicBool>,
    armed: Arc<AtomicBool>,
    pipe_policy: PipePolicy,
}

impl SignalGuard {
    /// Creates a guard that keeps going and has a healthy pipe.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(false)),
            pipe_ok: Arc::new(AtomicBool::new(true)),
            armed: Arc::new(AtomicBool::new(false)),
            pipe_policy: PipePolicy::default(),
        }
    }

    /// Sets how a vanished output reader ends the run.
    #[must_use]
    pub fn with_pipe_policy(mut self, policy: PipePolicy) -> Self {
        self.pipe_policy = policy;
        self
    }

    /// The broken pipe policy in effect.
    #[must_use]
    pub const fn pipe_policy(&self) -> PipePolicy {
        self.pipe_policy
    }

    /// Installs the termination signal handlers. Arming twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the OS error if a handler cannot be registered.
    pub fn arm(&self) -> io::Result<()> {
        if self.armed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        for &signal in TERM_SIGNALS {
            // The exit check must run before the flag is set, so register it first.
            flag::register_conditional_shutdown(
                signal,
                SECOND_SIGNAL_EXIT_STATUS,
                Arc::clone(&self.stop),
            )?;
            flag::register(signal, Arc::clone(&self.stop))?;
        }

        tracing::debug!("Termination signal handlers installed");
        Ok(())
    }

    /// Returns `true` if the guard's handlers are installed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    /// Returns `false` once a stop has been requested.
    #[must_use]
    pub fn keep_going(&self) -> bool {
        !self.stop.load(Ordering::SeqCst)
    }

    /// Requests a cooperative stop, as a first signal would.
    ///
    /// Returns `true` if this call made the request.
    pub fn request_stop(&self) -> bool {
        !self.stop.swap(true, Ordering::SeqCst)
    }

    /// Returns `false` once output to a vanished reader has been detected.
    #[must_use]
    pub fn pipe_ok(&self) -> bool {
        self.pipe_ok.load(Ordering::SeqCst)
    }

    /// Records that the output reader went away.
    pub fn mark_broken_pipe(&self) {
        self.pipe_ok.store(false, Ordering::SeqCst);
    }

    /// Records a vanished reader, then applies the [`PipePolicy`].
    ///
    /// Under [`PipePolicy::DefaultAction`] on Unix this does not return.
    pub fn on_broken_pipe(&self) {
        self.mark_broken_pipe();
        if self.pipe_policy == PipePolicy::DefaultAction {
            die_of_broken_pipe();
        }
    }
}

#[cfg(unix)]
fn die_of_broken_pipe() {
    // Resets SIGPIPE to its default disposition and raises it.
    if let Err(e) = signal_hook::low_level::emulate_default_handler(signal_hook::consts::SIGPIPE)
    {
        tracing::debug!("Could not re-raise SIGPIPE: {e}");
    }
}

#[cfg(not(unix))]
const fn die_of_broken_pipe() {}

impl Default for SignalGuard {
    fn default() -> Self {
        Self::new()
    }
}
