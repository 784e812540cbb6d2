//! Match diagnostics.
//!
//! [`PatternMatcher::explain`](crate::PatternMatcher::explain) returns a
//! [`MatchReport`] instead of a bare `Option`: the same decision, plus why a
//! failed attempt failed and how much work the sweep did.

use multiblock_foundation::IntRange;
use thiserror::Error;

use crate::context::MatchContext;

// =============================================================================
// Failure Reasons
// =============================================================================

/// Why a match attempt failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatchFailure {
    /// The leading aisle never matched inside its alignment window.
    #[error("no alignment of the leading aisle matched")]
    NoAlignment,

    /// An aisle matched fewer times than its minimum repetition count, in
    /// the last alignment tried.
    #[error("aisle {aisle} matched {matched} times, needs at least {min}")]
    InsufficientRepetitions {
        /// The aisle index.
        aisle: usize,
        /// Slices matched before repetition ended.
        matched: u32,
        /// Required minimum.
        min: u32,
    },

    /// A layer validator rejected a matched slice.
    #[error("layer validator for aisle {aisle} failed")]
    LayerValidator {
        /// The aisle index.
        aisle: usize,
    },

    /// A count predicate matched a number of cells outside its range.
    #[error("count predicate {index} matched {count} cells, expected {range}")]
    CountOutOfRange {
        /// Position of the count predicate in the pattern.
        index: usize,
        /// Number of matching cells.
        count: u32,
        /// Allowed range.
        range: IntRange,
    },

    /// A global validator rejected the final context.
    #[error("validator {index} failed")]
    Validator {
        /// Position of the validator in the pattern.
        index: usize,
    },
}

// =============================================================================
// Statistics
// =============================================================================

/// Work done by one match attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Cells whose predicate was evaluated.
    pub cells_tested: u64,
    /// Slices that matched completely.
    pub slices_matched: u64,
    /// Failed slices before the leading aisle aligned.
    pub alignment_retries: u64,
    /// Full restarts of the leading alignment.
    pub restarts: u64,
}

// =============================================================================
// Report
// =============================================================================

/// Outcome of a match attempt together with its statistics.
#[derive(Debug)]
pub struct MatchReport {
    /// The global context on success, the reason on failure.
    pub outcome: Result<MatchContext, MatchFailure>,
    /// Work done by the attempt.
    pub stats: MatchStats,
}

impl MatchReport {
    /// Returns true if the pattern matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The failure reason, if the pattern did not match.
    #[must_use]
    pub fn failure(&self) -> Option<&MatchFailure> {
        self.outcome.as_ref().err()
    }

    /// Consumes the report, returning the context of a successful match.
    #[must_use]
    pub fn into_context(self) -> Option<MatchContext> {
        self.outcome.ok()
    }
}
