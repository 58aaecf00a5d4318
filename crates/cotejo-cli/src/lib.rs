//! Cotejo CLI Library
//!
//! Command-line interface for comparing recorded style snapshots.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
mod output;

pub use commands::{
    CheckArgs, Cli, ColorArg, Commands, CompareArgs, ConfigArgs, ConfigFormat, ExpectArg,
    FormatArg, PhaseArg, SlugArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{Reporter, RunTally};
