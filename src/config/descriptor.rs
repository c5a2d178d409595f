//! Binding of resolvers to named fields on a configuration object.

use clap::parser::ValueSource;
use clap::{ArgMatches, Command};

use super::error::ConfigError;
use super::fallback::{FallbackToEnv, normalize_field};

/// A [`FallbackToEnv`] bound to a field of an owning configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDescriptor {
    owner: String,
    resolver: FallbackToEnv,
}

impl ConfigDescriptor {
    /// Binds `resolver` to `field` on `owner`.
    #[must_use]
    pub fn bind(owner: impl Into<String>, field: &str, resolver: FallbackToEnv) -> Self {
        Self {
            owner: owner.into(),
            resolver: resolver.with_field(field),
        }
    }

    /// Name of the owning configuration.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Normalized field name.
    #[must_use]
    pub fn field_name(&self) -> String {
        self.resolver.field_name()
    }

    /// Long flag derived from the field name.
    #[must_use]
    pub fn arg_name(&self) -> String {
        self.resolver.arg_name()
    }

    /// The wrapped resolver.
    #[must_use]
    pub const fn resolver(&self) -> &FallbackToEnv {
        &self.resolver
    }

    /// Resolves the value against the process environment.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.resolver.get()
    }

    /// Registers the field as a flag on `command`.
    #[must_use]
    pub fn add_to_command(&self, command: Command) -> Command {
        command.arg(self.resolver.to_arg())
    }

    /// Records the parsed value when it came from the command line.
    ///
    /// Defaults filled in by the parser are ignored so that the environment
    /// is still consulted at resolution time.
    pub fn apply(&mut self, matches: &ArgMatches) {
        let id = self.field_name();
        if matches.value_source(&id) != Some(ValueSource::CommandLine) {
            return;
        }

        let value = matches.try_get_one::<String>(&id).ok().flatten().cloned();
        self.resolver.set(value);
    }
}

/// The environment-backed fields declared by one tool.
///
/// Built once, registered on the parser, then frozen with explicit values
/// applied from the parsed flags.
///
/// # Example
///
/// ```
/// use filecmd::config::{EnvConfig, FallbackToEnv};
///
/// let config = EnvConfig::new("greeter")
///     .field("name", FallbackToEnv::new("GREETER_NAME").with_fallback("world"))?
///     .field("greeting", FallbackToEnv::new("GREETER_GREETING").with_fallback("Hello"))?;
///
/// assert_eq!(config.len(), 2);
/// assert_eq!(config.descriptor("name").map(|d| d.arg_name()).as_deref(), Some("--name"));
/// # Ok::<(), filecmd::config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    owner: String,
    descriptors: Vec<ConfigDescriptor>,
}

impl EnvConfig {
    /// Creates an empty configuration owned by `owner`.
    #[must_use]
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            descriptors: Vec::new(),
        }
    }

    /// Declares `field`, resolved by `resolver`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateField`] if `field` normalizes to the
    /// same flag as an already declared field.
    pub fn field(mut self, field: &str, resolver: FallbackToEnv) -> Result<Self, ConfigError> {
        let descriptor = ConfigDescriptor::bind(self.owner.clone(), field, resolver);
        let flag = descriptor.arg_name();

        if self.descriptors.iter().any(|d| d.arg_name() == flag) {
            return Err(ConfigError::DuplicateField {
                owner: self.owner,
                field: field.to_string(),
                flag,
            });
        }

        self.descriptors.push(descriptor);
        Ok(self)
    }

    /// Name of the owning configuration.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterates over the declared fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigDescriptor> {
        self.descriptors.iter()
    }

    /// Looks up a field by name; `my-field` and `my_field` are equivalent.
    #[must_use]
    pub fn descriptor(&self, field: &str) -> Option<&ConfigDescriptor> {
        let field = normalize_field(field);
        self.descriptors.iter().find(|d| d.field_name() == field)
    }

    /// Resolves `field` against the process environment.
    ///
    /// Unknown fields resolve to `None`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<String> {
        self.descriptor(field).and_then(ConfigDescriptor::get)
    }

    /// Resolves `field`, failing if it resolves to nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] naming the flag and variable
    /// that could provide the value.
    pub fn require(&self, field: &str) -> Result<String, ConfigError> {
        let descriptor = self.descriptor(field);
        descriptor.and_then(ConfigDescriptor::get).ok_or_else(|| {
            let hint = descriptor.map_or_else(
                || "No such field is declared".to_string(),
                |d| {
                    format!(
                        "Use {} or set ${}",
                        d.arg_name(),
                        d.resolver().variable()
                    )
                },
            );
            ConfigError::MissingRequired {
                field: normalize_field(field),
                hint,
            }
        })
    }

    /// Registers every field as a flag on `command`.
    #[must_use]
    pub fn add_to_command(&self, command: Command) -> Command {
        self.descriptors
            .iter()
            .fold(command, |command, d| d.add_to_command(command))
    }

    /// Records explicit values for every field given on the command line.
    pub fn apply_matches(&mut self, matches: &ArgMatches) {
        for descriptor in &mut self.descriptors {
            descriptor.apply(matches);
        }
    }
}
