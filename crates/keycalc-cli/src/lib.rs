//! keycalc CLI library
//!
//! Terminal front end for the keycalc evaluator: one-shot expressions, named
//! key sequences and a line-based session over stdin.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
pub mod output;
pub mod session;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, FormatArg, KeysArgs};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use session::{Session, SessionReport, Step};
