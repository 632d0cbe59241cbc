use std::{convert::Infallible, sync::Arc};

use portable_atomic::{AtomicBool, Ordering};

use crate::SolverError;

/// A shared flag for stopping a search from another thread.
///
/// Clones share the same flag. The solver polls it once per visited node, so
/// a search stops shortly after [`cancel`](Self::cancel) is called.
///
/// # Examples
///
/// ```
/// use reckon_core::NumberPool;
/// use reckon_solver::{CancelToken, CombinationSolver, SolverError, SolverStats};
///
/// let token = CancelToken::new();
/// token.cancel();
///
/// let solver = CombinationSolver::new();
/// let mut stats = SolverStats::default();
/// let result = solver.solve_cancellable(&NumberPool::from([1, 2, 3]), 100, &token, &mut stats);
/// assert_eq!(result, Err(SolverError::Cancelled));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of every search observing this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// A check the search performs at every node.
pub(crate) trait Interrupt {
    type Error;

    fn check(&self) -> Result<(), Self::Error>;
}

/// Never interrupts.
impl Interrupt for () {
    type Error = Infallible;

    fn check(&self) -> Result<(), Infallible> {
        Ok(())
    }
}

impl Interrupt for CancelToken {
    type Error = SolverError;

    fn check(&self) -> Result<(), SolverError> {
        if self.is_cancelled() {
            Err(SolverError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_flag() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
        assert_eq!(clone.check(), Err(SolverError::Cancelled));
    }

    #[test]
    fn test_cancel_from_other_thread() {
        let token = CancelToken::new();
        let remote = token.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(token.is_cancelled());
    }
}
