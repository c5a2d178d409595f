//! Error types for environment-backed configuration.

use thiserror::Error;

/// Error type for configuration declaration and validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Two fields normalize to the same flag.
    #[error("Field '{field}' collides with an existing field on {owner} (both map to {flag})")]
    DuplicateField {
        /// Name of the owning configuration
        owner: String,
        /// Field name that was rejected
        field: String,
        /// Normalized flag both fields map to
        flag: String,
    },

    /// A field would shadow a flag the toolkit registers itself.
    #[error("Field '{field}' maps to reserved flag {flag}")]
    ReservedFlag {
        /// Field name that was rejected
        field: String,
        /// The reserved flag
        flag: String,
    },

    /// A required value resolved to nothing.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: String,
        /// Hint for how to provide the value
        hint: String,
    },

    /// A value was present but not acceptable.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the field
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl ConfigError {
    /// Creates an `InvalidValue` error for a field.
    #[must_use]
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
