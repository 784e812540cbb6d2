//! Structural pattern matching for Multiblock.
//!
//! This crate provides:
//! - [`PatternBuilder`] and [`BlockPattern`] - Immutable 3D predicate grids
//! - [`CellPredicate`] and [`predicates`] - Tests over one cell and its neighbors
//! - [`MatchContext`] - Typed key-value state shared by predicates
//! - [`PatternMatcher`] - The aisle sweep with leading-alignment backtracking
//! - [`MatchReport`] - Why a pattern did or did not match
//!
//! # Example
//!
//! ```
//! use multiblock_foundation::{BlockId, BlockPos, BlockState, Orientation};
//! use multiblock_pattern::{PatternBuilder, PatternCell, check_pattern_at, predicates};
//! use multiblock_world::GridWorld;
//!
//! let casing = BlockState::of(BlockId(1));
//! let controller = BlockState::of(BlockId(2));
//!
//! let c = || PatternCell::from(predicates::state(casing));
//! let pattern = PatternBuilder::new()
//!     .aisle(vec![vec![c(), c(), c()]])
//!     .aisle(vec![vec![c(), predicates::state(controller).into_center(), c()]])
//!     .build()
//!     .unwrap();
//!
//! // Facing north, the first aisle lies one step south of the controller.
//! let world = GridWorld::new()
//!     .with_fill(BlockPos::new(-1, 0, 0), BlockPos::new(1, 0, 1), casing)
//!     .with_block(BlockPos::ORIGIN, controller);
//!
//! assert!(check_pattern_at(&pattern, &world, BlockPos::ORIGIN, Orientation::North).is_some());
//! assert!(check_pattern_at(&pattern, &world, BlockPos::ORIGIN, Orientation::South).is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod config;
pub mod context;
pub mod cursor;
pub mod explain;
pub mod matcher;
pub mod parts;
pub mod pattern;
pub mod predicate;
pub mod predicates;
pub mod validators;

pub use builder::PatternBuilder;
pub use config::MatcherConfig;
pub use context::MatchContext;
pub use cursor::BlockWorldState;
pub use explain::{MatchFailure, MatchReport, MatchStats};
pub use matcher::PatternMatcher;
pub use parts::{MultiblockParts, PARTS_KEY};
pub use pattern::{BlockPattern, CenterOffset};
pub use predicate::{CellPredicate, ContextValidator, CountMatch, PatternCell};

use multiblock_foundation::{BlockPos, Orientation};
use multiblock_world::BlockWorld;

/// Tests whether `pattern` is realized in `world` with its center at
/// `anchor`, returning the global context on success.
///
/// Shorthand for [`BlockPattern::check_pattern_at`].
#[must_use]
pub fn check_pattern_at(
    pattern: &BlockPattern,
    world: &dyn BlockWorld,
    anchor: BlockPos,
    orientation: Orientation,
) -> Option<MatchContext> {
    pattern.check_pattern_at(world, anchor, orientation)
}
