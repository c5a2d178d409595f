//! The command-line surface every tool shares.
//!
//! This module provides:
//! - The parser builder ([`CommandBase`]) with the universal `--verbose` flag
//! - The parse result ([`ParsedArgs`]), immutable once produced
//! - Process exit codes ([`exit_code`])

mod base;
pub mod exit_code;


pub use base::{CommandBase, FILENAMES_HELP, ParsedArgs, description};
