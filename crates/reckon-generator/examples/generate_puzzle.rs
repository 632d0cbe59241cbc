//! Example demonstrating number puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator`
//! - Generate a puzzle from a random seed, a hex seed or a phrase
//! - Solve it with `CombinationSolver` and print the solution steps
//! - Sample many puzzles and keep the hardest one
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a daily puzzle from a phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase 2026-10-14
//! ```
//!
//! Sample puzzles in parallel and keep the one whose shortest-found solution
//! needs the most steps (puzzles without an exact solution are skipped):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --hardest --max-tries 1000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use reckon_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use reckon_solver::{CombinationSolver, SolveResult};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Phrase hashed into a seed.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Number of large numbers (1-3). Random when omitted.
    #[arg(long, value_name = "COUNT", value_parser = clap::value_parser!(u8).range(1..=3))]
    large: Option<u8>,

    /// Sample puzzles and keep the one needing the most steps.
    #[arg(long, conflicts_with_all = ["seed", "phrase"])]
    hardest: bool,

    /// Maximum puzzles to sample with `--hardest`.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    max_tries: usize,
}

fn main() {
    let args = Args::parse();
    let generator = args
        .large
        .map_or_else(PuzzleGenerator::new, |n| PuzzleGenerator::with_large_count(n.into()));
    let solver = CombinationSolver::new();

    if args.hardest {
        if args.max_tries == 0 {
            eprintln!("--max-tries must be at least 1.");
            process::exit(1);
        }
        let best = (0..args.max_tries)
            .into_par_iter()
            .filter_map(|_| {
                let puzzle = generator.generate();
                let steps = solver.find_solution(&puzzle.numbers, puzzle.target)?.len();
                Some((puzzle, steps))
            })
            .max_by_key(|(_, steps)| *steps);
        let Some((puzzle, steps)) = best else {
            eprintln!("No sampled puzzle had an exact solution.");
            process::exit(1);
        };
        println!("Selection:");
        println!("  Max tries: {}", args.max_tries);
        println!("  Steps: {steps}");
        println!();
        print_puzzle(&puzzle, &solver);
        return;
    }

    let seed = match (args.seed, args.phrase) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => PuzzleSeed::from_phrase(&phrase),
        (None, None) => PuzzleSeed::random(),
    };
    print_puzzle(&generator.generate_with_seed(seed), &solver);
}

fn print_puzzle(puzzle: &GeneratedPuzzle, solver: &CombinationSolver) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Numbers:");
    println!("  {}", puzzle.numbers);
    println!();
    println!("Target:");
    println!("  {}", puzzle.target);
    println!();

    let result = solver.solve(&puzzle.numbers, puzzle.target);
    match &result {
        SolveResult::ExactMatch { .. } => println!("Solution:"),
        SolveResult::ClosestMatch { value, .. } => println!("Closest ({value}):"),
        SolveResult::NoSolution => println!("No solution."),
    }
    for op in result.operations() {
        println!("  {op}");
    }
}
