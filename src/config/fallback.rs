//! A single value resolved from an explicit setting, an environment
//! variable, or a static fallback.

use clap::{Arg, ArgAction};

use super::env::{Environment, ProcessEnvironment};
use super::setting::Setting;

/// Resolves one configurable value and describes it as a command-line flag.
///
/// Resolution order, highest first:
///
/// 1. **Explicit value** - set once after flags are parsed ([`FallbackToEnv::set`])
/// 2. **Environment variable** - `$variable`, read at resolution time
/// 3. **Fallback** - the static default given at construction
///
/// Anything else resolves to `None`; resolution never fails.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use filecmd::config::FallbackToEnv;
///
/// let editor = FallbackToEnv::new("EDITOR")
///     .with_fallback("vi")
///     .with_doc("Editor to launch")
///     .with_field("editor");
///
/// let env: HashMap<&str, &str> = HashMap::new();
/// assert_eq!(editor.resolve(&env).as_deref(), Some("vi"));
/// assert_eq!(editor.arg_name(), "--editor");
/// assert_eq!(editor.doc_in(&env), "Editor to launch. Defaults to $EDITOR (unset) or vi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackToEnv {
    variable: String,
    fallback: Setting<String>,
    doc: Setting<String>,
    value: Setting<String>,
    field: Option<String>,
}

impl FallbackToEnv {
    /// Creates a resolver backed by the environment variable `variable`.
    #[must_use]
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            fallback: Setting::Unset,
            doc: Setting::Unset,
            value: Setting::Unset,
            field: None,
        }
    }

    /// Sets the static value used when the variable is not set.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Setting::Present(fallback.into());
        self
    }

    /// Declares explicitly that there is no static fallback.
    ///
    /// Resolves like an unset fallback, but the help text says so.
    #[must_use]
    pub fn without_fallback(mut self) -> Self {
        self.fallback = Setting::Absent;
        self
    }

    /// Sets the human-readable description prepended to the help text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Setting::Present(doc.into());
        self
    }

    /// Names the configuration field this resolver is bound to.
    ///
    /// Without a field name the flag is derived from the variable name.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Returns the environment variable name.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns the configured fallback.
    #[must_use]
    pub const fn fallback(&self) -> &Setting<String> {
        &self.fallback
    }

    /// Returns the explicit value, if one was recorded.
    #[must_use]
    pub const fn explicit_value(&self) -> &Setting<String> {
        &self.value
    }

    /// Records an explicit value. `None` pins the value to nothing.
    pub fn set(&mut self, value: Option<String>) {
        self.value = value.into();
    }

    /// Resolves the value against the process environment.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.resolve(&ProcessEnvironment)
    }

    /// Resolves the value against `env`.
    #[must_use]
    pub fn resolve(&self, env: &impl Environment) -> Option<String> {
        match &self.value {
            Setting::Present(value) => Some(value.clone()),
            Setting::Absent => None,
            Setting::Unset => self.default_in(env),
        }
    }

    /// Returns what the value resolves to when nothing explicit is set,
    /// using the process environment.
    #[must_use]
    pub fn default_value(&self) -> Option<String> {
        self.default_in(&ProcessEnvironment)
    }

    /// Returns the environment value, else the fallback, using `env`.
    #[must_use]
    pub fn default_in(&self, env: &impl Environment) -> Option<String> {
        env.var(&self.variable)
            .or_else(|| self.fallback.as_present().cloned())
    }

    /// Builds help text from the current process environment.
    #[must_use]
    pub fn doc(&self) -> String {
        self.doc_in(&ProcessEnvironment)
    }

    /// Builds help text against `env`.
    ///
    /// Never cached: the text always reflects the environment passed in.
    #[must_use]
    pub fn doc_in(&self, env: &impl Environment) -> String {
        let mut text = self
            .doc
            .as_present()
            .map(|doc| doc.trim().to_string())
            .unwrap_or_default();

        if !text.is_empty() {
            if !text.ends_with('.') {
                text.push('.');
            }
            text.push(' ');
        }

        text.push_str("Defaults to ");
        match env.var(&self.variable) {
            Some(value) => text.push_str(&format!("${}={value:?}", self.variable)),
            None => text.push_str(&format!("${} (unset)", self.variable)),
        }

        match &self.fallback {
            Setting::Present(fallback) => text.push_str(&format!(" or {fallback}")),
            Setting::Absent => text.push_str(" or nothing"),
            Setting::Unset => {}
        }

        text
    }

    /// Returns the long flag, e.g. `--my-field` for field `my_field`.
    #[must_use]
    pub fn arg_name(&self) -> String {
        let name = self.field.as_deref().unwrap_or(&self.variable);
        format!("--{}", name.replace('_', "-").to_lowercase())
    }

    /// Returns the field name, the inverse normalization of [`Self::arg_name`].
    #[must_use]
    pub fn field_name(&self) -> String {
        normalize_field(&self.arg_name())
    }

    /// Builds the `clap` argument for this value.
    ///
    /// The argument id is [`Self::field_name`]; its default and help text are
    /// computed from the process environment at the time of the call.
    #[must_use]
    pub fn to_arg(&self) -> Arg {
        let arg_name = self.arg_name();
        let long = arg_name.trim_start_matches("--").to_string();

        let arg = Arg::new(self.field_name())
            .long(long)
            .value_name(self.variable.clone())
            .action(ArgAction::Set)
            .help(self.doc())
            .hide_default_value(true);

        match self.default_value() {
            Some(default) => arg.default_value(default),
            None => arg,
        }
    }
}

/// Normalizes a flag or field spelling to a field name.
///
/// `--My-Field`, `my-field` and `my_field` all become `my_field`.
#[must_use]
pub fn normalize_field(name: &str) -> String {
    name.strip_prefix("--")
        .unwrap_or(name)
        .replace('-', "_")
        .to_lowercase()
}
