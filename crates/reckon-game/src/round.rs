use log::debug;
use reckon_core::NumberPool;
use reckon_generator::GeneratedPuzzle;
use reckon_solver::{CombinationSolver, SolveResult};

use crate::{SubmissionError, score_for_difference};

/// The score of one accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundScore {
    /// The value of the submitted expression.
    pub value: i64,
    /// Absolute distance between `value` and the target.
    pub difference: u64,
    /// Points earned.
    pub points: u32,
}

impl RoundScore {
    /// Returns `true` if the submission hit the target.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.difference == 0
    }
}

/// One number-puzzle round.
///
/// A round holds the puzzle numbers and target, scores submissions and keeps
/// the best accepted score.
///
/// # Examples
///
/// ```
/// use reckon_core::NumberPool;
/// use reckon_game::{Round, SubmissionError};
///
/// let mut round = Round::new(NumberPool::from([25, 50, 3, 6, 7, 8]), 456);
///
/// let score = round.submit("(50 + 7) × 8")?;
/// assert!(score.is_exact());
/// assert_eq!(score.points, 100);
///
/// assert_eq!(round.submit("456"), Err(SubmissionError::UnavailableNumbers));
/// assert_eq!(round.best().map(|s| s.points), Some(100));
/// # Ok::<(), SubmissionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    numbers: NumberPool,
    target: i64,
    best: Option<RoundScore>,
    attempts: usize,
}

impl Round {
    /// Creates a round for `numbers` and `target`.
    #[must_use]
    pub fn new(numbers: NumberPool, target: i64) -> Self {
        Self {
            numbers,
            target,
            best: None,
            attempts: 0,
        }
    }

    /// Returns the puzzle numbers.
    #[must_use]
    pub fn numbers(&self) -> &NumberPool {
        &self.numbers
    }

    /// Returns the target.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Returns the best accepted score so far.
    #[must_use]
    pub fn best(&self) -> Option<RoundScore> {
        self.best
    }

    /// Returns the number of submissions, accepted or not.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Scores a player's expression against this round.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Eval`] if the expression cannot be
    /// evaluated, and [`SubmissionError::UnavailableNumbers`] if it uses
    /// numbers outside the puzzle. Either way the submission is worth zero
    /// points.
    pub fn submit(&mut self, expression: &str) -> Result<RoundScore, SubmissionError> {
        self.attempts += 1;
        let submission = reckon_eval::evaluate_submission(expression, &self.numbers)?;
        if !submission.uses_only_available_numbers {
            return Err(SubmissionError::UnavailableNumbers);
        }

        let difference = submission.value.abs_diff(self.target);
        let score = RoundScore {
            value: submission.value,
            difference,
            points: score_for_difference(difference),
        };
        debug!(
            "submission {expression:?} = {} scored {} points",
            score.value, score.points
        );
        if self.best.is_none_or(|best| score.points > best.points) {
            self.best = Some(score);
        }
        Ok(score)
    }

    /// Returns a hint: an exact solution if one exists, else the closest.
    #[must_use]
    pub fn hint(&self, solver: &CombinationSolver) -> SolveResult {
        solver.solve(&self.numbers, self.target)
    }
}

impl From<GeneratedPuzzle> for Round {
    fn from(puzzle: GeneratedPuzzle) -> Self {
        Self::new(puzzle.numbers, puzzle.target)
    }
}
