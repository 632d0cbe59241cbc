use std::{error::Error, io::Write};

use log::debug;

use crate::cli::PuzzleArgs;

pub(super) fn run(puzzle: &PuzzleArgs, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let generated = puzzle.generator().generate_with_seed(puzzle.seed());
    debug!("generated puzzle from seed {}", generated.seed);
    writeln!(out, "Seed: {}", generated.seed)?;
    writeln!(out, "Numbers: {}", generated.numbers)?;
    writeln!(out, "Target: {}", generated.target)?;
    Ok(())
}
