//! The `reckon` command-line number puzzle.

use std::process;

fn main() {
    better_panic::install();
    env_logger::init();

    if let Err(err) = reckon_cli::run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
