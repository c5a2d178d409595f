//! Parser construction and argument parsing.

use std::ffi::OsString;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::config::defaults::{FILENAMES, RESERVED_FLAGS, VERBOSE};
use crate::config::{ConfigError, EnvConfig};
use crate::files::Filenames;

/// Help text of the positional filenames argument.
pub const FILENAMES_HELP: &str = "A list of files; - for stdin; separate arguments from files \
    with an optional -- ; specifying no files means stdin";

/// Picks a tool description: the tool's own text, else the module's.
///
/// Blank text counts as missing.
#[must_use]
pub fn description(tool_doc: Option<&str>, module_doc: Option<&str>) -> Option<String> {
    [tool_doc, module_doc]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|doc| !doc.is_empty())
        .map(ToString::to_string)
}

/// Builder for a tool's argument parser.
///
/// Always carries `-v/--verbose`. Environment-backed fields declared with
/// [`CommandBase::config`] are registered when parsing, so their help text
/// reflects the environment at that moment.
#[derive(Debug, Clone)]
pub struct CommandBase {
    command: Command,
    config: EnvConfig,
    filenames: bool,
}

impl CommandBase {
    /// Creates a parser named `name` with the `--verbose` flag.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let command = Command::new(name.into()).arg(
            Arg::new(VERBOSE)
                .short('v')
                .long(VERBOSE)
                .action(ArgAction::SetTrue)
                .help("Verbose is more verbose"),
        );

        Self {
            command,
            config: EnvConfig::default(),
            filenames: false,
        }
    }

    /// Sets the description from the tool's documentation, falling back to
    /// the module's.
    #[must_use]
    pub fn describe(mut self, tool_doc: Option<&str>, module_doc: Option<&str>) -> Self {
        if let Some(about) = description(tool_doc, module_doc) {
            self.command = self.command.about(about);
        }
        self
    }

    /// Sets the version reported by `--version`.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.command = self.command.version(version.into());
        self
    }

    /// Adds a tool-specific argument.
    #[must_use]
    pub fn arg(mut self, arg: Arg) -> Self {
        self.command = self.command.arg(arg);
        self
    }

    /// Declares the tool's environment-backed fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReservedFlag`] if a field maps to a flag the
    /// toolkit registers itself.
    pub fn config(mut self, config: EnvConfig) -> Result<Self, ConfigError> {
        if let Some(descriptor) = config
            .iter()
            .find(|d| RESERVED_FLAGS.contains(&d.arg_name().as_str()))
        {
            return Err(ConfigError::ReservedFlag {
                field: descriptor.field_name(),
                flag: descriptor.arg_name(),
            });
        }

        self.config = config;
        Ok(self)
    }

    /// Adds the positional filenames argument. Adding it twice is a no-op.
    #[must_use]
    pub fn with_filenames(mut self) -> Self {
        if !self.filenames {
            self.command = self.command.arg(
                Arg::new(FILENAMES)
                    .num_args(0..)
                    .action(ArgAction::Append)
                    .value_name("FILE")
                    .help(FILENAMES_HELP),
            );
            self.filenames = true;
        }
        self
    }

    /// The declared environment-backed fields.
    #[must_use]
    pub const fn env_config(&self) -> &EnvConfig {
        &self.config
    }

    /// Builds the full parser, including the environment-backed fields.
    #[must_use]
    pub fn command(&self) -> Command {
        self.config.add_to_command(self.command.clone())
    }

    /// Renders `--help` as it would appear right now.
    #[must_use]
    pub fn render_help(&self) -> String {
        self.command().render_help().to_string()
    }

    /// Parses `args` (including the program name).
    ///
    /// # Errors
    ///
    /// Returns the `clap` error for malformed arguments, `--help` and
    /// `--version`; callers normally hand it to [`clap::Error::exit`].
    pub fn try_parse_from<I, T>(self, args: I) -> Result<ParsedArgs, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command().try_get_matches_from(args)?;
        Ok(ParsedArgs::new(self.config, matches))
    }

    /// Parses `args`, exiting the process on malformed input.
    #[must_use]
    pub fn parse_from<I, T>(self, args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.try_parse_from(args).unwrap_or_else(|e| e.exit())
    }
}

/// The result of parsing, fixed for the rest of the run.
#[derive(Debug, Clone)]
pub struct ParsedArgs {
    verbose: bool,
    filenames: Filenames,
    config: EnvConfig,
    matches: ArgMatches,
}

impl ParsedArgs {
    fn new(mut config: EnvConfig, matches: ArgMatches) -> Self {
        config.apply_matches(&matches);

        let verbose = matches.get_flag(VERBOSE);
        let filenames = Filenames::resolve(
            matches
                .try_get_many::<String>(FILENAMES)
                .ok()
                .flatten()
                .into_iter()
                .flatten()
                .cloned(),
        );

        Self {
            verbose,
            filenames,
            config,
            matches,
        }
    }

    /// Whether `-v/--verbose` was given.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Filenames to process; `["-"]` when none were given.
    #[must_use]
    pub const fn filenames(&self) -> &Filenames {
        &self.filenames
    }

    /// Environment-backed fields with command-line values applied.
    #[must_use]
    pub const fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Raw matches, for tool-specific arguments.
    #[must_use]
    pub const fn matches(&self) -> &ArgMatches {
        &self.matches
    }
}
