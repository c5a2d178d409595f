//! Environment variable lookup.
//!
//! Resolution goes through the [`Environment`] trait so that tests can
//! supply a fixed map instead of mutating the process environment.

use std::collections::HashMap;

/// Source of environment variables.
pub trait Environment {
    /// Returns the value of `name`, or `None` if it is not set.
    ///
    /// Variables holding non-UTF-8 data are treated as unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for HashMap<&str, &str> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| (*value).to_string())
    }
}
