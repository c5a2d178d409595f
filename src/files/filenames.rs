//! Ordered, never-empty list of targets to process.

use std::fmt;

/// Token meaning standard input (when reading) or standard output (when writing).
pub const STDIO_MARK: &str = "-";

/// Returns `true` if `filename` is the stdio token.
#[must_use]
pub fn is_stdio(filename: &str) -> bool {
    filename == STDIO_MARK
}

/// The filenames a tool will process, in argument order.
///
/// Never empty: resolving an empty argument list yields `["-"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filenames(Vec<String>);

impl Filenames {
    /// Resolves positional arguments into filenames.
    #[must_use]
    pub fn resolve<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = args.into_iter().map(Into::into).collect();
        if names.is_empty() {
            names.push(STDIO_MARK.to_string());
        }
        Self(names)
    }

    /// Standard input only.
    #[must_use]
    pub fn stdin() -> Self {
        Self(vec![STDIO_MARK.to_string()])
    }

    /// Iterates over the filenames in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of filenames; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the filenames as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for Filenames {
    fn default() -> Self {
        Self::stdin()
    }
}

impl<'a> IntoIterator for &'a Filenames {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Filenames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}
