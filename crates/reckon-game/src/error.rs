use reckon_eval::EvalError;

/// Reasons a submission earns no points.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SubmissionError {
    /// The expression could not be evaluated.
    #[display("invalid expression: {_0}")]
    Eval(#[from] EvalError),
    /// The expression uses a number not in the puzzle, or uses one too often.
    #[display("expression uses numbers that are not available")]
    UnavailableNumbers,
}
