//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: BlockPos, Facing, the orientation transform,
//! BlockState, IntRange, and Error.

mod values;
