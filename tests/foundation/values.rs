//! Integration tests for value types
//!
//! Tests BlockPos arithmetic, BlockState, and IntRange.

use multiblock_foundation::{BlockId, BlockPos, BlockState, Facing, IntRange};

// =============================================================================
// BlockPos
// =============================================================================

#[test]
fn pos_offsets() {
    let p = BlockPos::new(1, 2, 3);
    assert_eq!(p.offset(Facing::North), BlockPos::new(1, 2, 2));
    assert_eq!(p.offset(Facing::East), BlockPos::new(2, 2, 3));
    assert_eq!(p.offset_by(Facing::Down, 5), BlockPos::new(1, -3, 3));
    assert_eq!(p.offset_by(Facing::West, -2), BlockPos::new(3, 2, 3));
}

#[test]
fn pos_arithmetic() {
    let a = BlockPos::new(1, 2, 3);
    let b = BlockPos::new(-4, 0, 2);
    assert_eq!(a + b, BlockPos::new(-3, 2, 5));
    assert_eq!(a - b, BlockPos::new(5, 2, 1));
    assert_eq!(-a, BlockPos::new(-1, -2, -3));
    assert_eq!(a.manhattan(b), 5 + 2 + 1);
    assert_eq!(BlockPos::from([7, 8, 9]).to_array(), [7, 8, 9]);
}

#[test]
fn pos_formatting() {
    let p = BlockPos::new(-1, 64, 3);
    assert_eq!(format!("{p}"), "(-1, 64, 3)");
    assert_eq!(format!("{p:?}"), "BlockPos(-1, 64, 3)");
}

// =============================================================================
// BlockState
// =============================================================================

#[test]
fn block_state_identity() {
    let casing = BlockState::of(BlockId(7));
    assert!(!casing.is_air());
    assert!(BlockState::AIR.is_air());
    assert_eq!(BlockState::default(), BlockState::AIR);
    assert_ne!(casing, casing.with_meta(1));
    assert_eq!(BlockState::from(BlockId(7)), casing);
}

// =============================================================================
// IntRange
// =============================================================================

#[test]
fn range_bounds_are_inclusive() {
    let r = IntRange::new(3, 5).unwrap();
    assert!(!r.contains(2));
    assert!(r.contains(3));
    assert!(r.contains(5));
    assert!(!r.contains(6));
    assert_eq!(r.to_string(), "[3, 5]");
}

#[test]
fn range_shorthands() {
    assert!(IntRange::at_least(2).contains(u32::MAX));
    assert_eq!(IntRange::at_least(2).to_string(), "[2, ..]");
    assert!(IntRange::at_most(2).contains(0));
    assert_eq!(IntRange::exactly(4).min(), IntRange::exactly(4).max());
    assert_eq!(IntRange::default(), IntRange::exactly(1));
}
