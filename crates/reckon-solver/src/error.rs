/// Errors that can occur while searching for a solution.
///
/// Failing to find a solution is not an error; it is reported through
/// [`SolveResult::NoSolution`](crate::SolveResult::NoSolution) or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The search was stopped through its [`CancelToken`](crate::CancelToken).
    #[display("search was cancelled")]
    Cancelled,
}
