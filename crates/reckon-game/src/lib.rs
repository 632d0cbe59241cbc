//! Game-round logic for number puzzles.
//!
//! This crate binds a generated puzzle to the expression evaluator and the
//! combination solver: it scores player submissions with a fixed tier table
//! and produces hints.

pub use self::{error::*, round::*, score::*};

mod error;
mod round;
mod score;
