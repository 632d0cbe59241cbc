use std::{
    error::Error,
    io::{self, Write},
};

use log::info;
use reckon_core::NumberPool;
use reckon_solver::SolveResult;

use crate::{
    cli::{CliArgs, Command, SolverArgs},
    worker::{self, WorkError, WorkRequest, WorkResponse},
};

mod eval;
mod generate;
mod play;
mod solve;

pub(crate) fn run(args: CliArgs) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.command {
        Command::Solve { numbers, target } => {
            solve::run(&NumberPool::from(numbers), target, args.solver, &mut out)
        }
        Command::Eval {
            expression,
            numbers,
        } => eval::run(&expression, numbers.map(NumberPool::from).as_ref(), &mut out),
        Command::Generate(puzzle) => generate::run(&puzzle, &mut out),
        Command::Play(puzzle) => play::run(&puzzle, args.solver, io::stdin().lock(), &mut out),
    }
}

/// Solves on the background worker, giving up after the configured timeout.
fn request_hint(
    numbers: &NumberPool,
    target: i64,
    solver: SolverArgs,
) -> Result<SolveResult, WorkError> {
    let handle = worker::enqueue(WorkRequest::Hint {
        numbers: numbers.clone(),
        target,
        max_depth: solver.max_depth,
    })?;
    hint_result(handle.wait_timeout(solver.timeout())?)
}

fn hint_result(response: WorkResponse) -> Result<SolveResult, WorkError> {
    match response {
        WorkResponse::HintReady { result, stats } => {
            info!(
                "search visited {} nodes and generated {} candidates",
                stats.nodes_visited(),
                stats.candidates_generated()
            );
            Ok(result)
        }
        WorkResponse::Cancelled => Err(WorkError::Cancelled),
    }
}

fn write_result(out: &mut impl Write, result: &SolveResult, target: i64) -> io::Result<()> {
    match result {
        SolveResult::ExactMatch { .. } => writeln!(out, "Solution:")?,
        SolveResult::ClosestMatch { value, .. } => writeln!(
            out,
            "Closest: {value} (off by {})",
            value.abs_diff(target)
        )?,
        SolveResult::NoSolution => writeln!(out, "No solution.")?,
    }
    for op in result.operations() {
        writeln!(out, "  {op}")?;
    }
    Ok(())
}
