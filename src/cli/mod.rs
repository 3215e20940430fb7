//! Command-line interface layer for `lingua`.
//!
//! The CLI is a thin consumer of the library: it loads a messages directory,
//! runs the coverage diagnostics, and prints a cargo-style report. All logic
//! lives in the library modules so hosts embedding the engine never pull in
//! this layer.

pub mod args;
pub mod exit_status;
pub mod report;
pub mod run;

pub use args::{Arguments, CheckCommand, Command};
pub use exit_status::ExitStatus;
pub use run::run;
