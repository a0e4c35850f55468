//! Command-line interface for metrics-docgen
//!
//! # Implementation Model
//!
//! The tool has a single command. `run` parses the arguments with clap and
//! hands them to `generate_docs`, which:
//!
//! 1. Initializes logging from `--log-level`
//! 2. Loads the catalog, either the embedded default or `--catalog <PATH>`
//! 3. Prints the catalog and stops if `--print-catalog` was given
//! 4. Extracts metrics from every source root, in argument order
//! 5. Renders the document in memory and writes it to the last path argument
//!
//! All console output goes through a [`Host`] so tests can capture it and
//! observe the exit code instead of terminating.

mod generate;
mod host;
mod run;

pub use generate::{GenerateArgs, LogLevel, generate_docs};
pub use host::Host;
pub use run::run;
