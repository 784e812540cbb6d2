//! World query interface, tiles, and in-memory voxel grids for Multiblock.
//!
//! This crate provides:
//! - [`BlockWorld`] - The read-only query interface the matcher consumes
//! - [`Tile`] and [`Ability`] - Side data attached to cells and the capabilities it exposes
//! - [`GridWorld`] - Persistent in-memory world with structural sharing
//! - [`BlockRegistry`] - Name-to-id registry for block types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod query;
pub mod registry;
pub mod tile;

pub use grid::GridWorld;
pub use query::BlockWorld;
pub use registry::BlockRegistry;
pub use tile::{Ability, SimpleTile, Tile, TileRef};
