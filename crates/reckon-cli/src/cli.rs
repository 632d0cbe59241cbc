use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use reckon_generator::{PuzzleGenerator, PuzzleSeed};
use reckon_solver::DEFAULT_MAX_DEPTH;

use crate::version;

/// Reckon - combine numbers with arithmetic to reach a target
#[derive(Debug, Parser)]
#[command(name = "reckon", version = version::build_version(), about)]
pub(crate) struct CliArgs {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) solver: SolverArgs,
}

/// Solver settings shared by every command that searches.
#[derive(Debug, Clone, Copy, Args)]
pub(crate) struct SolverArgs {
    /// Maximum number of operations in a solution
    #[arg(long, global = true, value_name = "DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub(crate) max_depth: usize,

    /// Give up a solve after this many milliseconds
    #[arg(long, global = true, value_name = "MS", default_value_t = 5_000)]
    pub(crate) timeout_ms: u64,
}

impl SolverArgs {
    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Find a solution, or the closest reachable value
    Solve {
        /// Numbers to combine
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Value to reach
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,
    },
    /// Evaluate an arithmetic expression
    Eval {
        /// Expression using + - * / × ÷ − and parentheses
        expression: String,

        /// Check that the expression only uses these numbers
        #[arg(short, long, num_args = 1..)]
        numbers: Option<Vec<i64>>,
    },
    /// Generate a puzzle
    Generate(PuzzleArgs),
    /// Play a round: type expressions, `?` for a hint, empty line to quit
    Play(PuzzleArgs),
}

/// Options selecting which puzzle to generate.
#[derive(Debug, Clone, Args)]
pub(crate) struct PuzzleArgs {
    /// Seed as 64 hex digits
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    pub(crate) seed: Option<PuzzleSeed>,

    /// Phrase hashed into a seed
    #[arg(long, value_name = "PHRASE")]
    pub(crate) phrase: Option<String>,

    /// Number of large numbers (1-3); random when omitted
    #[arg(long, value_name = "COUNT", value_parser = clap::value_parser!(u8).range(1..=3))]
    pub(crate) large: Option<u8>,
}

impl PuzzleArgs {
    pub(crate) fn seed(&self) -> PuzzleSeed {
        match (self.seed, &self.phrase) {
            (Some(seed), _) => seed,
            (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
            (None, None) => PuzzleSeed::random(),
        }
    }

    pub(crate) fn generator(&self) -> PuzzleGenerator {
        self.large
            .map_or_else(PuzzleGenerator::new, |n| PuzzleGenerator::with_large_count(n.into()))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_solve() {
        let args = CliArgs::parse_from([
            "reckon", "solve", "25", "50", "3", "6", "7", "8", "--target", "456", "--max-depth", "5",
        ]);
        let Command::Solve { numbers, target } = args.command else {
            panic!("expected solve, got {:?}", args.command);
        };
        assert_eq!(numbers, [25, 50, 3, 6, 7, 8]);
        assert_eq!(target, 456);
        assert_eq!(args.solver.max_depth, 5);
        assert_eq!(args.solver.timeout(), Duration::from_millis(5_000));
    }

    #[test]
    fn test_parse_eval() {
        let args = CliArgs::parse_from(["reckon", "eval", "(3 + 3) × 7", "-n", "3", "3", "7"]);
        let Command::Eval { expression, numbers } = args.command else {
            panic!("expected eval, got {:?}", args.command);
        };
        assert_eq!(expression, "(3 + 3) × 7");
        assert_eq!(numbers, Some(vec![3, 3, 7]));
    }

    #[test]
    fn test_parse_puzzle_args() {
        let args = CliArgs::parse_from(["reckon", "generate", "--phrase", "daily", "--large", "2"]);
        let Command::Generate(puzzle) = args.command else {
            panic!("expected generate, got {:?}", args.command);
        };
        assert_eq!(puzzle.seed(), PuzzleSeed::from_phrase("daily"));
        assert_eq!(puzzle.generator(), PuzzleGenerator::with_large_count(2));
    }

    #[test]
    fn test_reject_bad_arguments() {
        assert!(CliArgs::try_parse_from(["reckon", "solve", "--target", "5"]).is_err());
        assert!(CliArgs::try_parse_from(["reckon", "generate", "--large", "4"]).is_err());
        assert!(CliArgs::try_parse_from(["reckon", "play", "--seed", "xyz"]).is_err());
        assert!(
            CliArgs::try_parse_from(["reckon", "generate", "--seed", "00", "--phrase", "p"])
                .is_err()
        );
    }
}
