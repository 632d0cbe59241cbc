//! Ordered multiset of puzzle numbers.

use std::fmt::{self, Display};

use tinyvec::TinyVec;

/// Inline storage used by [`NumberPool`].
///
/// Puzzles hold six numbers, so pools of that size never allocate.
type PoolStorage = TinyVec<[i64; 8]>;

/// An ordered multiset of numbers.
///
/// The pool keeps its insertion order, which defines the traversal order of
/// the solver. Duplicates are permitted and each element stands for one
/// independent slot that can be consumed once.
///
/// A pool is never mutated in place by the solver: combining two numbers
/// returns a new pool, so every search branch owns its own state.
///
/// # Examples
///
/// ```
/// use reckon_core::NumberPool;
///
/// let pool = NumberPool::from([3, 3, 7]);
/// assert_eq!(pool.len(), 3);
/// assert!(pool.contains(7));
///
/// // Each 3 can be matched once
/// assert!(pool.covers(&[3, 3]));
/// assert!(!pool.covers(&[3, 3, 3]));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct NumberPool {
    numbers: PoolStorage,
}

impl NumberPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of slots in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Returns `true` if the pool has no numbers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Returns the numbers in pool order.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.numbers
    }

    /// Returns an iterator over the numbers in pool order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.numbers.iter().copied()
    }

    /// Returns `true` if `value` occupies at least one slot.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.numbers.contains(&value)
    }

    /// Returns a new pool with the slots at `i` and `j` removed and `result`
    /// appended.
    ///
    /// The remaining numbers keep their relative order.
    ///
    /// # Panics
    ///
    /// Panics if `i == j` or either index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use reckon_core::NumberPool;
    ///
    /// let pool = NumberPool::from([1, 2, 3, 4]);
    /// let next = pool.combine(0, 2, 4);
    /// assert_eq!(next.as_slice(), &[2, 4, 4]);
    /// ```
    #[must_use]
    pub fn combine(&self, i: usize, j: usize, result: i64) -> Self {
        assert!(i != j, "cannot combine a slot with itself: {i}");
        assert!(
            i < self.len() && j < self.len(),
            "slot out of bounds: ({i}, {j}) for pool of {}",
            self.len()
        );
        let mut numbers = PoolStorage::default();
        for (k, &n) in self.numbers.iter().enumerate() {
            if k != i && k != j {
                numbers.push(n);
            }
        }
        numbers.push(result);
        Self { numbers }
    }

    /// Returns the first number whose distance to `target` is minimal.
    ///
    /// Returns `None` for an empty pool.
    ///
    /// # Examples
    ///
    /// ```
    /// use reckon_core::NumberPool;
    ///
    /// let pool = NumberPool::from([10, 30, 20]);
    /// assert_eq!(pool.closest_to(24), Some(20));
    /// // Ties keep the earlier slot
    /// assert_eq!(pool.closest_to(25), Some(30));
    /// assert_eq!(NumberPool::new().closest_to(5), None);
    /// ```
    #[must_use]
    pub fn closest_to(&self, target: i64) -> Option<i64> {
        let mut best: Option<(u64, i64)> = None;
        for n in self.iter() {
            let diff = n.abs_diff(target);
            if best.is_none_or(|(best_diff, _)| diff < best_diff) {
                best = Some((diff, n));
            }
        }
        best.map(|(_, n)| n)
    }

    /// Returns `true` if every value in `literals` can be matched to a
    /// distinct slot of this pool.
    ///
    /// Matching is greedy: each literal takes the first slot holding the same
    /// value that no earlier literal has consumed.
    #[must_use]
    pub fn covers(&self, literals: &[i64]) -> bool {
        let mut consumed = vec![false; self.len()];
        literals.iter().all(|&literal| {
            let slot = self
                .numbers
                .iter()
                .zip(&consumed)
                .position(|(&n, &used)| !used && n == literal);
            match slot {
                Some(k) => {
                    consumed[k] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl<const N: usize> From<[i64; N]> for NumberPool {
    fn from(numbers: [i64; N]) -> Self {
        numbers.into_iter().collect()
    }
}

impl From<&[i64]> for NumberPool {
    fn from(numbers: &[i64]) -> Self {
        numbers.iter().copied().collect()
    }
}

impl From<Vec<i64>> for NumberPool {
    fn from(numbers: Vec<i64>) -> Self {
        numbers.into_iter().collect()
    }
}

impl FromIterator<i64> for NumberPool {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        Self {
            numbers: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NumberPool {
    type Item = i64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, i64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.iter().copied()
    }
}

impl Display for NumberPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, n) in self.iter().enumerate() {
            if k > 0 {
                f.write_str(" ")?;
            }
            Display::fmt(&n, f)?;
        }
        Ok(())
    }
}
