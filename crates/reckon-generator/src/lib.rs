//! Number puzzle generation.
//!
//! A puzzle is six numbers, a few "large" ones drawn from
//! [`LARGE_NUMBERS`] and the rest "small" ones from [`SMALL_RANGE`], plus a
//! target in [`TARGET_RANGE`]. Generation is driven by a [`PuzzleSeed`], so
//! the same seed always reproduces the same puzzle.
//!
//! # Examples
//!
//! ```
//! use reckon_generator::{PuzzleGenerator, PuzzleSeed, TARGET_RANGE};
//!
//! let generator = PuzzleGenerator::new();
//! let seed = PuzzleSeed::from_phrase("daily");
//!
//! let puzzle = generator.generate_with_seed(seed);
//! assert_eq!(puzzle, generator.generate_with_seed(seed));
//! assert!(TARGET_RANGE.contains(&puzzle.target));
//! ```

use std::ops::RangeInclusive;

use rand::prelude::*;
use rand_pcg::Pcg64;
use reckon_core::NumberPool;

pub use self::seed::*;

mod seed;

/// The large numbers a puzzle may draw from; each appears at most once.
pub const LARGE_NUMBERS: [i64; 4] = [25, 50, 75, 100];

/// Range the small numbers are drawn from, with replacement.
pub const SMALL_RANGE: RangeInclusive<i64> = 1..=10;

/// Range of puzzle targets.
pub const TARGET_RANGE: RangeInclusive<i64> = 101..=999;

/// Range of accepted large-number counts.
pub const LARGE_COUNT_RANGE: RangeInclusive<usize> = 1..=3;

/// Minimum number of small numbers in a puzzle.
pub const MIN_SMALL_COUNT: usize = 4;

/// Total puzzle size when the large count allows it.
pub const PUZZLE_SIZE: usize = 6;

/// A generated puzzle together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Large numbers first, then small numbers, in draw order.
    pub numbers: NumberPool,
    /// The value to reach.
    pub target: i64,
    /// The seed this puzzle was generated from.
    pub seed: PuzzleSeed,
}

/// Generates number puzzles.
///
/// By default the number of large numbers is drawn uniformly from
/// [`LARGE_COUNT_RANGE`]; [`with_large_count`](Self::with_large_count) fixes
/// it, as when a player picks how many large numbers to play with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    large_count: Option<usize>,
}

impl PuzzleGenerator {
    /// Creates a generator drawing the large count at random.
    #[must_use]
    pub const fn new() -> Self {
        Self { large_count: None }
    }

    /// Creates a generator always using `large_count` large numbers.
    ///
    /// # Panics
    ///
    /// Panics if `large_count` is outside [`LARGE_COUNT_RANGE`].
    #[must_use]
    pub fn with_large_count(large_count: usize) -> Self {
        assert!(
            LARGE_COUNT_RANGE.contains(&large_count),
            "large count must be in {LARGE_COUNT_RANGE:?}, got {large_count}"
        );
        Self {
            large_count: Some(large_count),
        }
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(seed.to_bytes());

        let large_count = self
            .large_count
            .unwrap_or_else(|| rng.random_range(LARGE_COUNT_RANGE));
        let small_count = PUZZLE_SIZE.saturating_sub(large_count).max(MIN_SMALL_COUNT);

        let mut large = LARGE_NUMBERS.to_vec();
        let mut numbers = Vec::with_capacity(large_count + small_count);
        for _ in 0..large_count {
            let k = rng.random_range(0..large.len());
            numbers.push(large.swap_remove(k));
        }
        for _ in 0..small_count {
            numbers.push(rng.random_range(SMALL_RANGE));
        }
        let target = rng.random_range(TARGET_RANGE);

        GeneratedPuzzle {
            numbers: NumberPool::from(numbers),
            target,
            seed,
        }
    }
}
