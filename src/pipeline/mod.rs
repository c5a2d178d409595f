//! File-processing pipeline.
//!
//! A tool implements (or assembles) one [`FilenameProcessor`] and hands it to
//! [`main`]. The processor is invoked once per filename, in argument order.
//!
//! # Strategies
//!
//! The bundled processors differ in how a target is read:
//!
//! | Processor | Reads | Writes |
//! |---|---|---|
//! | [`ContentsProcessor`] | whole contents | per [`WriteStrategy`], only when changed |
//! | [`LineProcessor`] | one line at a time | each line the callback emits |
//! | [`HandleProcessor`] | an open handle | whatever the tool writes |
//!
//! [`WriteStrategy::InPlaceIfChanged`] rewrites the target itself (stdout
//! for `-`); [`WriteStrategy::PrintIfChanged`] prints to stdout and leaves
//! the target alone. Identical output writes nothing in either case.
//!
//! # Cancellation
//!
//! The [`SignalGuard`](crate::signal::SignalGuard) is polled between
//! filenames and between lines; a stop request ends processing early
//! without error.

mod contents;
mod handle;
mod lines;
mod processor;
mod run;

#[cfg(test)]
mod contents_tests;
#[cfg(test)]
mod lines_tests;

pub use crate::files::ProcessError;
pub use contents::{ContentsProcessor, ContentsTransform, WriteStrategy, in_place, printing};
pub use handle::{HandleProcessor, HandleTransform, handle};
pub use lines::{LineAction, LineProcessor, LineTransform, lines};
pub use processor::{FilenameProcessor, process_all};
pub use run::{RunError, main, main_with, run_from, run_parsed};
