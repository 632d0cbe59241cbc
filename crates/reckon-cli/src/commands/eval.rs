use std::{error::Error, io::Write};

use reckon_core::NumberPool;
use reckon_game::SubmissionError;

/// Prints the value of `expression`, failing if it uses numbers outside
/// `numbers`.
pub(super) fn run(
    expression: &str,
    numbers: Option<&NumberPool>,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let value = reckon_eval::evaluate(expression)?;
    writeln!(out, "{value}")?;
    if let Some(numbers) = numbers
        && !reckon_eval::uses_only_available_numbers(expression, numbers)
    {
        return Err(SubmissionError::UnavailableNumbers.into());
    }
    Ok(())
}
