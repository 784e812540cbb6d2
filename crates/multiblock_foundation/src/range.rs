//! Inclusive integer ranges.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An inclusive range `[min, max]` of non-negative counts.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntRange {
    min: u32,
    max: u32,
}

impl IntRange {
    /// Creates a range.
    ///
    /// # Errors
    /// Returns an error if `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(Error::invalid_range(min, max));
        }
        Ok(Self { min, max })
    }

    /// A range containing only `n`.
    #[must_use]
    pub const fn exactly(n: u32) -> Self {
        Self { min: n, max: n }
    }

    /// A range `[n, u32::MAX]`.
    #[must_use]
    pub const fn at_least(n: u32) -> Self {
        Self {
            min: n,
            max: u32::MAX,
        }
    }

    /// A range `[0, n]`.
    #[must_use]
    pub const fn at_most(n: u32) -> Self {
        Self { min: 0, max: n }
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Returns true if `n` lies inside the range.
    #[must_use]
    pub const fn contains(self, n: u32) -> bool {
        n >= self.min && n <= self.max
    }
}

impl Default for IntRange {
    /// Exactly one.
    fn default() -> Self {
        Self::exactly(1)
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max == u32::MAX {
            write!(f, "[{}, ..]", self.min)
        } else {
            write!(f, "[{}, {}]", self.min, self.max)
        }
    }
}
