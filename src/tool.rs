//! The substitution tool: flags, modes, and processor assembly.
//!
//! Every setting is an environment-backed flag:
//!
//! | Flag | Variable | Fallback |
//! |---|---|---|
//! | `--pattern` | `$FILECMD_PATTERN` | none (required) |
//! | `--replacement` | `$FILECMD_REPLACEMENT` | empty |
//! | `--mode` | `$FILECMD_MODE` | `print` |

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use filecmd::command::{CommandBase, ParsedArgs};
use filecmd::config::{ConfigError, EnvConfig, FallbackToEnv};
use filecmd::pipeline::{FilenameProcessor, LineAction, handle, in_place, lines, printing};
use regex::Regex;

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;

/// Program name.
pub const NAME: &str = "filecmd";

/// Tool description shown by `--help`.
pub const ABOUT: &str = "Replace regular expression matches in files or standard input.";

/// Field names.
pub mod field {
    /// The regular expression.
    pub const PATTERN: &str = "pattern";
    /// The replacement text.
    pub const REPLACEMENT: &str = "replacement";
    /// The processing mode.
    pub const MODE: &str = "mode";
}

/// Environment variables backing the fields.
pub mod var {
    /// Variable for [`super::field::PATTERN`].
    pub const PATTERN: &str = "FILECMD_PATTERN";
    /// Variable for [`super::field::REPLACEMENT`].
    pub const REPLACEMENT: &str = "FILECMD_REPLACEMENT";
    /// Variable for [`super::field::MODE`].
    pub const MODE: &str = "FILECMD_MODE";
}

/// How targets are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print changed contents to stdout.
    Print,
    /// Rewrite changed files in place.
    InPlace,
    /// Print only matching lines, substituted.
    Lines,
    /// Print `filename:count` of matching lines.
    Count,
}

impl Mode {
    /// Every mode, in help order.
    pub const ALL: [Self; 4] = [Self::Print, Self::InPlace, Self::Lines, Self::Count];

    /// The mode's name on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::InPlace => "in-place",
            Self::Lines => "lines",
            Self::Count => "count",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| {
                let names = Self::ALL.map(Self::as_str).join(", ");
                ConfigError::invalid(field::MODE, format!("'{s}' is not one of {names}"))
            })
    }
}

/// Declares the tool's environment-backed fields.
///
/// # Errors
///
/// Returns [`ConfigError`] if two fields collide.
pub fn env_config() -> Result<EnvConfig, ConfigError> {
    EnvConfig::new(NAME)
        .field(
            field::PATTERN,
            FallbackToEnv::new(var::PATTERN)
                .without_fallback()
                .with_doc("Regular expression to search for"),
        )?
        .field(
            field::REPLACEMENT,
            FallbackToEnv::new(var::REPLACEMENT)
                .with_fallback("")
                .with_doc("Replacement text; $1 and ${name} refer to capture groups"),
        )?
        .field(
            field::MODE,
            FallbackToEnv::new(var::MODE)
                .with_fallback(Mode::Print.as_str())
                .with_doc("One of print, in-place, lines, count"),
        )
}

/// Builds the tool's parser.
///
/// # Errors
///
/// Returns [`ConfigError`] if the fields cannot be declared.
pub fn command_base() -> Result<CommandBase, ConfigError> {
    CommandBase::new(NAME)
        .describe(Some(ABOUT), option_env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .config(env_config()?)
}

/// A compiled substitution and the mode to apply it in.
#[derive(Debug, Clone)]
pub struct Substitution {
    regex: Regex,
    replacement: String,
    mode: Mode,
}

impl Substitution {
    /// Resolves and validates the substitution from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] without a pattern and
    /// [`ConfigError::InvalidValue`] for a bad pattern or mode.
    pub fn from_args(args: &ParsedArgs) -> Result<Self, ConfigError> {
        let config = args.config();

        let pattern = config.require(field::PATTERN)?;
        let regex = Regex::new(&pattern)
            .map_err(|e| ConfigError::invalid(field::PATTERN, e.to_string()))?;
        let replacement = config.get(field::REPLACEMENT).unwrap_or_default();
        let mode = config
            .get(field::MODE)
            .as_deref()
            .unwrap_or(Mode::Print.as_str())
            .parse()?;

        tracing::debug!("Substituting /{pattern}/ with {replacement:?} in {mode} mode");

        Ok(Self {
            regex,
            replacement,
            mode,
        })
    }

    /// Replaces every match in `text`.
    #[must_use]
    pub fn replace(&self, text: &str) -> String {
        self.regex
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }

    /// Substitutes a matching line, keeping its terminator; `None` otherwise.
    #[must_use]
    pub fn replace_line(&self, line: &str) -> Option<String> {
        let body = line.trim_end_matches(['\n', '\r']);
        if !self.regex.is_match(body) {
            return None;
        }
        Some(format!("{}{}", self.replace(body), &line[body.len()..]))
    }

    /// Returns `true` if `line` (without terminator) matches.
    #[must_use]
    pub fn matches_line(&self, line: &str) -> bool {
        self.regex.is_match(line.trim_end_matches(['\n', '\r']))
    }

    /// Assembles the processor for the selected mode.
    #[must_use]
    pub fn into_processor(self) -> Box<dyn FilenameProcessor> {
        match self.mode {
            Mode::Print => Box::new(printing(move |contents: &str| self.replace(contents))),
            Mode::InPlace => Box::new(in_place(move |contents: &str| self.replace(contents))),
            Mode::Lines => Box::new(lines(move |_: &str, line: &str| {
                self.replace_line(line)
                    .map_or(LineAction::Suppress, LineAction::Emit)
            })),
            Mode::Count => Box::new(handle(
                move |filename: &str, input: &mut dyn BufRead, out: &mut dyn Write| {
                    let mut count = 0_usize;
                    for line in input.lines() {
                        if self.matches_line(&line?) {
                            count += 1;
                        }
                    }
                    writeln!(out, "{filename}:{count}")
                },
            )),
        }
    }
}

/// Builds the processor from parsed arguments.
///
/// # Errors
///
/// Returns [`ConfigError`] for a missing or invalid setting.
pub fn build(args: &ParsedArgs) -> Result<Box<dyn FilenameProcessor>, ConfigError> {
    Substitution::from_args(args).map(Substitution::into_processor)
}
