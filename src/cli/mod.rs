//! CLI module for userdir
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliResult};
