//! filecmd: building blocks for line- and file-oriented command-line tools.
//!
//! A tool declares its flags with [`command::CommandBase`], optionally backs
//! some of them with environment variables through [`config::EnvConfig`],
//! picks a processing strategy from [`pipeline`], and hands both to
//! [`pipeline::main`]:
//!
//! ```no_run
//! use filecmd::command::CommandBase;
//! use filecmd::config::ConfigError;
//! use filecmd::pipeline;
//!
//! fn main() -> std::process::ExitCode {
//!     let base = CommandBase::new("upper").describe(Some("Uppercase files"), None);
//!     pipeline::main(base, |_args| {
//!         Ok::<_, ConfigError>(pipeline::printing(|contents: &str| contents.to_uppercase()))
//!     })
//! }
//! ```
//!
//! Every such tool accepts `-v/--verbose` and zero or more filenames, where
//! `-` (or no filenames at all) means the standard streams.

pub mod command;
pub mod config;
pub mod files;
pub mod logging;
pub mod pipeline;
pub mod signal;
