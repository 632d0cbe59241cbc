use reckon_core::{NumberPool, Operation, Operator};

/// A combination of the pool slots `i < j` into one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) i: usize,
    pub(crate) j: usize,
    pub(crate) operation: Operation,
}

impl Candidate {
    /// Returns the pool obtained by applying this candidate.
    pub(crate) fn apply(&self, pool: &NumberPool) -> NumberPool {
        pool.combine(self.i, self.j, self.operation.result())
    }
}

/// Returns every candidate operation on `pool` in traversal order.
///
/// Pairs are visited in `i < j` lexicographic order; for each pair the
/// operators come in the order `+`, `−`, `×`, `a ÷ b`, `b ÷ a`. Divisions
/// are only proposed when exact, subtraction always yields the non-negative
/// difference, and results overflowing `i64` are skipped.
pub(crate) fn candidates(pool: &NumberPool) -> impl Iterator<Item = Candidate> + '_ {
    let numbers = pool.as_slice();
    let len = numbers.len();
    (0..len)
        .flat_map(move |i| (i + 1..len).map(move |j| (i, j)))
        .flat_map(move |(i, j)| {
            let (a, b) = (numbers[i], numbers[j]);
            pair_results(a, b)
                .into_iter()
                .flatten()
                .map(move |(operator, result)| Candidate {
                    i,
                    j,
                    operation: Operation::new(a, b, operator, result),
                })
        })
}

fn pair_results(a: i64, b: i64) -> [Option<(Operator, i64)>; 5] {
    let (larger, smaller) = (a.max(b), a.min(b));
    [
        a.checked_add(b).map(|r| (Operator::Add, r)),
        larger.checked_sub(smaller).map(|r| (Operator::Sub, r)),
        a.checked_mul(b).map(|r| (Operator::Mul, r)),
        Operator::Div.apply(a, b).map(|r| (Operator::Div, r)),
        Operator::Div.apply(b, a).map(|r| (Operator::Div, r)),
    ]
}
