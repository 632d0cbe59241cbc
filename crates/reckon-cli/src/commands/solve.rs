use std::{error::Error, io::Write};

use reckon_core::NumberPool;

use crate::cli::SolverArgs;

pub(super) fn run(
    numbers: &NumberPool,
    target: i64,
    solver: SolverArgs,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let result = super::request_hint(numbers, target, solver)?;
    super::write_result(out, &result, target)?;
    Ok(())
}
