use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds display as 64 lowercase hex digits and parse back from the same
/// form, so a puzzle can be shared or replayed from its seed alone.
///
/// # Examples
///
/// ```
/// use reckon_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("2026-10-14");
/// let parsed: PuzzleSeed = seed.to_string().parse()?;
/// assert_eq!(seed, parsed);
/// # Ok::<(), reckon_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    ///
    /// Every player using the same phrase (such as today's date) gets the
    /// same puzzle.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string does not have exactly 64 characters.
    #[display("seed must be 64 hex digits, got {_0} characters")]
    InvalidLength(#[error(not(source))] usize),
    /// The string contains a character that is not a hex digit.
    #[display("invalid hex digit {_0:?} in seed")]
    InvalidDigit(#[error(not(source))] char),
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength(len));
        }
        let mut bytes = [0; 32];
        let mut digits = s.chars().map(|c| {
            c.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(ParseSeedError::InvalidDigit(c))
        });
        for byte in &mut bytes {
            // Length was checked above, so both digits are present
            let (Some(hi), Some(lo)) = (digits.next(), digits.next()) else {
                return Err(ParseSeedError::InvalidLength(len));
            };
            *byte = (hi? << 4) | lo?;
        }
        Ok(Self(bytes))
    }
}
