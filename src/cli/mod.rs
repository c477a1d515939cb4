//! CLI module for rollcall
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP API
//! - init: Create an empty data file
//! - list: Print the stored students

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{apply_env, init, list, load_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
