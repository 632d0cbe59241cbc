//! The `reckon` command-line interface.
//!
//! Subcommands solve puzzles, evaluate expressions, generate puzzles and
//! play interactive rounds. Solves run on a background worker thread and are
//! cancelled once `--timeout-ms` elapses.

use std::error::Error;

use clap::Parser as _;
use log::info;

use self::cli::CliArgs;

mod cli;
mod commands;
pub mod version;
mod worker;

/// Parses the command line and runs the selected command.
///
/// # Errors
///
/// Returns an error if the command fails: an invalid expression, a solve
/// that timed out, or an I/O failure.
pub fn run() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();
    info!("reckon {}", version::build_version());
    commands::run(args)
}
