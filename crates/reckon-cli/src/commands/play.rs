use std::{
    error::Error,
    io::{BufRead, Write},
};

use log::warn;
use reckon_game::Round;

use crate::{
    cli::{PuzzleArgs, SolverArgs},
    worker::WorkError,
};

const HINT: &str = "?";

pub(super) fn run(
    puzzle: &PuzzleArgs,
    solver: SolverArgs,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let generated = puzzle.generator().generate_with_seed(puzzle.seed());
    writeln!(out, "Seed: {}", generated.seed)?;
    let mut round = Round::from(generated);
    play(&mut round, solver, input, out)
}

/// Reads one expression per line until the target is hit, an empty line or
/// end of input.
fn play(
    round: &mut Round,
    solver: SolverArgs,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    writeln!(out, "Numbers: {}", round.numbers())?;
    writeln!(out, "Target: {}", round.target())?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        if line == HINT {
            match super::request_hint(round.numbers(), round.target(), solver) {
                Ok(result) => super::write_result(out, &result, round.target())?,
                Err(err @ (WorkError::TimedOut(_) | WorkError::Cancelled)) => {
                    warn!("hint search gave up: {err}");
                    writeln!(out, "No hint: {err}")?;
                }
                Err(err) => return Err(err.into()),
            }
        } else {
            match round.submit(line) {
                Ok(score) => writeln!(
                    out,
                    "{} (off by {}): {} points",
                    score.value, score.difference, score.points
                )?,
                Err(err) => writeln!(out, "{err}: 0 points")?,
            }
            if round.best().is_some_and(|best| best.is_exact()) {
                break;
            }
        }
        prompt(out)?;
    }

    let best = round.best().map_or(0, |best| best.points);
    writeln!(out, "Best: {best} points in {} attempts", round.attempts())?;
    Ok(())
}

fn prompt(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use reckon_core::NumberPool;
    use reckon_solver::DEFAULT_MAX_DEPTH;

    use super::*;

    const SOLVER: SolverArgs = SolverArgs {
        max_depth: DEFAULT_MAX_DEPTH,
        timeout_ms: 60_000,
    };

    fn session(input: &str) -> String {
        let mut round = Round::new(NumberPool::from([25, 50, 3, 6, 7, 8]), 456);
        let mut out = Vec::new();
        play(&mut round, SOLVER, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session_until_exact() {
        let out = session("50 × 8 + 25 + 7 × 3\n3 + 3\n(50 + 7) × 8\n25\n");
        assert_eq!(
            out,
            "Numbers: 25 50 3 6 7 8\n\
             Target: 456\n\
             > 446 (off by 10): 20 points\n\
             > expression uses numbers that are not available: 0 points\n\
             > 456 (off by 0): 100 points\n\
             Best: 100 points in 3 attempts\n"
        );
    }

    #[test]
    fn test_session_ends_on_empty_line() {
        let out = session("1 / 0\n\n25\n");
        assert!(out.contains("> invalid expression: division by zero: 0 points\n"), "{out}");
        assert!(out.ends_with("> Best: 0 points in 1 attempts\n"), "{out}");
    }

    #[test]
    fn test_session_hint() {
        let out = session("?\n");
        assert!(out.contains("> Solution:\n"), "{out}");
        assert!(out.ends_with("= 456\n> Best: 0 points in 0 attempts\n"), "{out}");
    }

    #[test]
    fn test_run_prints_seed() {
        let args = PuzzleArgs {
            seed: None,
            phrase: Some("play".to_owned()),
            large: None,
        };
        let mut out = Vec::new();
        run(&args, SOLVER, Cursor::new(""), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Seed: "), "{out}");
        assert!(out.ends_with("Best: 0 points in 0 attempts\n"), "{out}");
    }
}
