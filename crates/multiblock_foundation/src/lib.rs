//! Core types for Multiblock.
//!
//! This crate provides:
//! - [`BlockPos`] - Integer grid positions
//! - [`Facing`] and [`Orientation`] - World directions and runtime rotations
//! - [`RelativeDirection`] and [`StructureAxes`] - The pattern-to-world transform
//! - [`BlockState`] - The observable state of a single cell
//! - [`IntRange`] - Inclusive integer ranges for repetitions and counts
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod facing;
pub mod pos;
pub mod range;
pub mod state;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use facing::{Axis, Facing, Orientation, RelativeDirection, StructureAxes};
pub use pos::BlockPos;
pub use range::IntRange;
pub use state::{BlockId, BlockState};
