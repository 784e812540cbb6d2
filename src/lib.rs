//! Multiblock - Structure detection over voxel grids
//!
//! This crate re-exports all layers of the Multiblock system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: multiblock_pattern     : Contexts, predicates, patterns, the matcher
//! Layer 1: multiblock_world       : World queries, tiles, in-memory grids
//! Layer 0: multiblock_foundation  : Core types (BlockPos, Facing, BlockState, Error)
//! ```

pub use multiblock_foundation as foundation;
pub use multiblock_pattern as pattern;
pub use multiblock_world as world;

pub use multiblock_pattern::check_pattern_at;
