//! Environment-backed configuration.
//!
//! This module provides:
//! - A tri-state [`Setting`] distinguishing "unset" from "explicitly nothing"
//! - A single-value resolver ([`FallbackToEnv`])
//! - Field bindings ([`ConfigDescriptor`]) and their collection ([`EnvConfig`])
//! - An [`Environment`] seam over process variables
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values passed via the command line
//! 2. **Environment variables** - `$VARIABLE` at resolution time
//! 3. **Fallback** - Static value given when the field is declared
//!
//! Parser-supplied defaults never count as explicit, so a variable set after
//! parsing is still honoured.
//!
//! # Naming
//!
//! A field `my_field` becomes the flag `--my-field`; the flag maps back to
//! `my_field`. Two fields that normalize to the same flag are rejected when
//! declared.

pub mod defaults;
mod descriptor;
mod env;
mod error;
mod fallback;
mod setting;


pub use descriptor::{ConfigDescriptor, EnvConfig};
pub use env::{Environment, ProcessEnvironment};
pub use error::ConfigError;
pub use fallback::{FallbackToEnv, normalize_field};
pub use setting::Setting;
