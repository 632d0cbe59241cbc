//! Combination search for number puzzles.
//!
//! Given a pool of numbers and a target, the solver combines pairs of numbers
//! with `+ − × ÷` (each number used once, every intermediate result returned
//! to the pool) looking for the target. When no exact combination exists
//! within the depth bound it falls back to the closest value it can reach.
//!
//! # Examples
//!
//! ```
//! use reckon_core::NumberPool;
//! use reckon_solver::{CombinationSolver, SolveResult};
//!
//! let solver = CombinationSolver::new();
//! let pool = NumberPool::from([25, 50, 3, 6, 7, 8]);
//!
//! match solver.solve(&pool, 456) {
//!     SolveResult::ExactMatch { operations } => {
//!         assert_eq!(operations.last().map(|op| op.result()), Some(456));
//!     }
//!     other => panic!("expected an exact match, got {other:?}"),
//! }
//! ```

pub use self::{cancel::*, combination_solver::*, error::*};

mod cancel;
mod candidates;
mod combination_solver;
mod error;

#[cfg(test)]
mod testing;
