//! CLI module for Podium
//!
//! Provides the command-line interface:
//! - init: write an empty dataset skeleton
//! - check: one-shot dataset validation
//! - start: boot and serve the stdin JSON protocol
//! - serve: boot and serve the HTTP API

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, init, run, run_command, serve, start, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_lines, write_error, write_line, write_response};
