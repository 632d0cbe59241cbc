//! Core data structures for number-puzzle applications.
//!
//! This crate provides the shared bookkeeping used by the solver, the
//! expression evaluator and the game layer.
//!
//! # Overview
//!
//! - [`pool`]: [`NumberPool`], the ordered multiset of numbers available to a
//!   puzzle or to one branch of a search.
//! - [`operation`]: [`Operator`] and [`Operation`], the binary combination
//!   steps a solution is made of.
//!
//! # Examples
//!
//! ```
//! use reckon_core::{NumberPool, Operation, Operator};
//!
//! let pool = NumberPool::from([25, 50, 3, 6, 7, 8]);
//!
//! // Combine 50 and 8 (positions 1 and 5) into 400
//! let op = Operation::new(50, 8, Operator::Mul, 400);
//! let next = pool.combine(1, 5, op.result());
//!
//! assert_eq!(next.as_slice(), &[25, 3, 6, 7, 400]);
//! assert_eq!(op.to_string(), "50 × 8 = 400");
//! ```

pub mod operation;
pub mod pool;

// Re-export commonly used types
pub use self::{
    operation::{Operation, Operator},
    pool::NumberPool,
};
