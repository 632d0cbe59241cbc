//! Test utilities for solver results.
//!
//! [`SolutionTester`] replays an operation sequence against the initial pool
//! and checks that every step is legal.

use reckon_core::{NumberPool, Operation};

/// A test harness replaying solutions against their initial pool.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct SolutionTester {
    initial: NumberPool,
    target: i64,
}

impl SolutionTester {
    /// Creates a tester for solutions of `target` from `initial`.
    pub fn new(initial: NumberPool, target: i64) -> Self {
        Self { initial, target }
    }

    /// Asserts that `operations` is legal and its last step produces the target.
    ///
    /// An empty sequence is accepted when the target is in the initial pool.
    #[track_caller]
    pub fn assert_reaches_target(&self, operations: &[Operation]) {
        let pool = self.replay(operations);
        match operations.last() {
            Some(last) => assert_eq!(
                last.result(),
                self.target,
                "last step {last} does not produce target {}",
                self.target
            ),
            None => assert!(
                pool.contains(self.target),
                "empty solution but {} is not in [{pool}]",
                self.target
            ),
        }
    }

    /// Asserts that `operations` is legal and leaves `value` in the pool.
    #[track_caller]
    pub fn assert_reaches_value(&self, operations: &[Operation], value: i64) {
        let pool = self.replay(operations);
        assert!(
            pool.contains(value),
            "value {value} is not in final pool [{pool}] (target {})",
            self.target
        );
    }

    /// Applies `operations` one by one and returns the final pool.
    #[track_caller]
    fn replay(&self, operations: &[Operation]) -> NumberPool {
        let mut pool = self.initial.clone();
        for (step, op) in operations.iter().enumerate() {
            assert!(
                op.operand1() >= op.operand2(),
                "step {step}: operands out of order in {op}"
            );
            assert!(op.is_consistent(), "step {step}: inconsistent {op}");

            let numbers = pool.as_slice();
            let i = numbers
                .iter()
                .position(|&n| n == op.operand1())
                .unwrap_or_else(|| panic!("step {step}: {} not in [{pool}]", op.operand1()));
            let j = numbers
                .iter()
                .enumerate()
                .position(|(k, &n)| k != i && n == op.operand2())
                .unwrap_or_else(|| panic!("step {step}: {} not in [{pool}]", op.operand2()));
            pool = pool.combine(i, j, op.result());
        }
        pool
    }
}
