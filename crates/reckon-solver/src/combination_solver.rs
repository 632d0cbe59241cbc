use log::debug;
use reckon_core::{NumberPool, Operation};

use crate::{
    CancelToken, SolverError,
    cancel::Interrupt,
    candidates::candidates,
};

/// Default bound on the number of combination steps in one solution.
///
/// Four steps are enough to touch every number of a six-number puzzle.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// The outcome of [`CombinationSolver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveResult {
    /// The operations reach the target exactly.
    ///
    /// The sequence is empty when the target is already in the pool.
    ExactMatch {
        /// Steps in application order.
        operations: Vec<Operation>,
    },
    /// No exact combination exists within the depth bound; the operations
    /// reach `value`, the closest achievable number.
    ClosestMatch {
        /// The closest value reached.
        value: i64,
        /// Steps in application order.
        operations: Vec<Operation>,
    },
    /// Nothing could be combined or compared.
    NoSolution,
}

impl SolveResult {
    /// Returns the operations of the result, or an empty slice for
    /// [`NoSolution`](Self::NoSolution).
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        match self {
            Self::ExactMatch { operations } | Self::ClosestMatch { operations, .. } => operations,
            Self::NoSolution => &[],
        }
    }
}

/// The best value found by [`CombinationSolver::find_closest_solution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosestSolution {
    /// The value closest to the target.
    pub closest: i64,
    /// Steps producing `closest`, in application order.
    ///
    /// Empty when `closest` was already in the initial pool.
    pub operations: Vec<Operation>,
}

impl ClosestSolution {
    /// Returns the absolute distance between the closest value and `target`.
    #[must_use]
    pub fn difference(&self, target: i64) -> u64 {
        self.closest.abs_diff(target)
    }
}

/// Statistics collected during searches.
///
/// A statistics object can be reused across calls to accumulate counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolverStats {
    nodes_visited: usize,
    candidates_generated: usize,
}

impl SolverStats {
    /// Returns the number of search nodes (pools) visited.
    #[must_use]
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Returns the number of candidate operations generated.
    #[must_use]
    pub fn candidates_generated(&self) -> usize {
        self.candidates_generated
    }
}

/// A depth-bounded search over pairwise combinations of pool numbers.
///
/// At each node the solver tries every pair `i < j` of the current pool in
/// pool order, and for each pair the operators `+`, `−`, `×`, `a ÷ b`,
/// `b ÷ a`. Subtraction always takes the non-negative difference and
/// division is only tried when exact. The first success in this order wins,
/// so results are deterministic for a given pool order, target and depth.
///
/// # Examples
///
/// ```
/// use reckon_core::NumberPool;
/// use reckon_solver::CombinationSolver;
///
/// let solver = CombinationSolver::new();
/// let pool = NumberPool::from([2, 3, 7]);
///
/// // (2 + 3) × 7 = 35
/// let operations = solver.find_solution(&pool, 35).unwrap();
/// assert_eq!(operations.len(), 2);
/// assert_eq!(operations[1].result(), 35);
///
/// // 1000 is out of reach: fall back to the closest value
/// assert!(solver.find_solution(&pool, 1000).is_none());
/// let closest = solver.find_closest_solution(&pool, 1000).unwrap();
/// assert_eq!(closest.closest, 42); // 2 × 3 × 7
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationSolver {
    max_depth: usize,
}

impl Default for CombinationSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CombinationSolver {
    /// Creates a solver bounded at [`DEFAULT_MAX_DEPTH`] steps.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates a solver bounded at `max_depth` steps.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns the depth bound.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Searches for operations reaching `target` exactly.
    ///
    /// Returns `None` when no combination within the depth bound reaches the
    /// target, and immediately for pools of fewer than two numbers.
    #[must_use]
    pub fn find_solution(&self, pool: &NumberPool, target: i64) -> Option<Vec<Operation>> {
        self.find_solution_with_stats(pool, target, &mut SolverStats::default())
    }

    /// Same as [`find_solution`](Self::find_solution), accumulating into `stats`.
    pub fn find_solution_with_stats(
        &self,
        pool: &NumberPool,
        target: i64,
        stats: &mut SolverStats,
    ) -> Option<Vec<Operation>> {
        let Ok(operations) = Search::new(target, &(), stats).exact(pool, self.max_depth);
        operations
    }

    /// Searches for the reachable value closest to `target`.
    ///
    /// Bounded searches run at depth limits 1 through the solver's bound. At
    /// every visited node, not only at leaves, each pool number is compared
    /// with the target; the first strictly closer value replaces the best so
    /// far. An exact hit ends the search.
    ///
    /// Returns `None` only for an empty pool.
    #[must_use]
    pub fn find_closest_solution(&self, pool: &NumberPool, target: i64) -> Option<ClosestSolution> {
        self.find_closest_solution_with_stats(pool, target, &mut SolverStats::default())
    }

    /// Same as [`find_closest_solution`](Self::find_closest_solution),
    /// accumulating into `stats`.
    pub fn find_closest_solution_with_stats(
        &self,
        pool: &NumberPool,
        target: i64,
        stats: &mut SolverStats,
    ) -> Option<ClosestSolution> {
        let Ok(closest) = Search::new(target, &(), stats).closest(pool, self.max_depth);
        closest
    }

    /// Searches for an exact solution, falling back to the closest value.
    ///
    /// Pools of fewer than two numbers give [`SolveResult::NoSolution`].
    #[must_use]
    pub fn solve(&self, pool: &NumberPool, target: i64) -> SolveResult {
        self.solve_with_stats(pool, target, &mut SolverStats::default())
    }

    /// Same as [`solve`](Self::solve), accumulating into `stats`.
    pub fn solve_with_stats(
        &self,
        pool: &NumberPool,
        target: i64,
        stats: &mut SolverStats,
    ) -> SolveResult {
        let Ok(result) = self.solve_inner(pool, target, &(), stats);
        result
    }

    /// Same as [`solve_with_stats`](Self::solve_with_stats), polling `token`
    /// at every search node.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Cancelled`] once `token` is cancelled.
    pub fn solve_cancellable(
        &self,
        pool: &NumberPool,
        target: i64,
        token: &CancelToken,
        stats: &mut SolverStats,
    ) -> Result<SolveResult, SolverError> {
        self.solve_inner(pool, target, token, stats)
    }

    fn solve_inner<I>(
        &self,
        pool: &NumberPool,
        target: i64,
        interrupt: &I,
        stats: &mut SolverStats,
    ) -> Result<SolveResult, I::Error>
    where
        I: Interrupt,
    {
        if pool.len() < 2 {
            return Ok(SolveResult::NoSolution);
        }
        let mut search = Search::new(target, interrupt, stats);
        if let Some(operations) = search.exact(pool, self.max_depth)? {
            debug!("exact solution for {target} from [{pool}]: {} steps", operations.len());
            return Ok(SolveResult::ExactMatch { operations });
        }
        let result = match search.closest(pool, self.max_depth)? {
            Some(ClosestSolution {
                closest,
                operations,
            }) => {
                debug!("closest value to {target} from [{pool}]: {closest}");
                SolveResult::ClosestMatch {
                    value: closest,
                    operations,
                }
            }
            None => SolveResult::NoSolution,
        };
        Ok(result)
    }
}

/// State shared by the recursive search of one call.
struct Search<'a, I> {
    target: i64,
    interrupt: &'a I,
    stats: &'a mut SolverStats,
    operations: Vec<Operation>,
}

impl<'a, I> Search<'a, I>
where
    I: Interrupt,
{
    fn new(target: i64, interrupt: &'a I, stats: &'a mut SolverStats) -> Self {
        Self {
            target,
            interrupt,
            stats,
            operations: Vec::new(),
        }
    }

    fn visit(&mut self) -> Result<(), I::Error> {
        self.interrupt.check()?;
        self.stats.nodes_visited += 1;
        Ok(())
    }

    fn exact(&mut self, pool: &NumberPool, limit: usize) -> Result<Option<Vec<Operation>>, I::Error> {
        if pool.len() < 2 {
            return Ok(None);
        }
        self.operations.clear();
        if self.exact_at(pool, 0, limit)? {
            Ok(Some(std::mem::take(&mut self.operations)))
        } else {
            Ok(None)
        }
    }

    fn exact_at(&mut self, pool: &NumberPool, depth: usize, limit: usize) -> Result<bool, I::Error> {
        self.visit()?;
        if pool.contains(self.target) {
            return Ok(true);
        }
        if depth >= limit || pool.len() < 2 {
            return Ok(false);
        }
        for candidate in candidates(pool) {
            self.stats.candidates_generated += 1;
            let next = candidate.apply(pool);
            self.operations.push(candidate.operation);
            if self.exact_at(&next, depth + 1, limit)? {
                return Ok(true);
            }
            self.operations.pop();
        }
        Ok(false)
    }

    fn closest(
        &mut self,
        pool: &NumberPool,
        max_depth: usize,
    ) -> Result<Option<ClosestSolution>, I::Error> {
        let limits = if max_depth == 0 { 0..=0 } else { 1..=max_depth };
        let mut best = None;
        for limit in limits {
            self.operations.clear();
            if self.closest_at(pool, 0, limit, &mut best)? {
                break;
            }
        }
        Ok(best)
    }

    /// Returns `Ok(true)` once the target itself has been reached.
    fn closest_at(
        &mut self,
        pool: &NumberPool,
        depth: usize,
        limit: usize,
        best: &mut Option<ClosestSolution>,
    ) -> Result<bool, I::Error> {
        self.visit()?;
        if let Some(closest) = pool.closest_to(self.target) {
            let diff = closest.abs_diff(self.target);
            if best
                .as_ref()
                .is_none_or(|best| diff < best.difference(self.target))
            {
                *best = Some(ClosestSolution {
                    closest,
                    operations: self.operations.clone(),
                });
            }
            if diff == 0 {
                return Ok(true);
            }
        }
        if depth >= limit || pool.len() < 2 {
            return Ok(false);
        }
        for candidate in candidates(pool) {
            self.stats.candidates_generated += 1;
            let next = candidate.apply(pool);
            self.operations.push(candidate.operation);
            if self.closest_at(&next, depth + 1, limit, best)? {
                return Ok(true);
            }
            self.operations.pop();
        }
        Ok(false)
    }
}
