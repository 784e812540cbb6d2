//! Integration tests for GridWorld
//!
//! Tests persistent updates, bulk filling, bounds, and trait-object access.

use std::sync::Arc;

use multiblock_foundation::{BlockId, BlockPos, BlockState};
use multiblock_world::{BlockWorld, GridWorld};

const STONE: BlockState = BlockState::of(BlockId(1));
const GLASS: BlockState = BlockState::of(BlockId(2));

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn variants_share_history() {
    let base = GridWorld::new().with_fill(BlockPos::ORIGIN, BlockPos::new(3, 3, 3), STONE);
    let window = base.with_block(BlockPos::new(1, 1, 0), GLASS);

    assert_eq!(base.block_state(BlockPos::new(1, 1, 0)), STONE);
    assert_eq!(window.block_state(BlockPos::new(1, 1, 0)), GLASS);
    assert_eq!(base.block_count(), 64);
    assert_eq!(window.block_count(), 64);
}

#[test]
fn clearing_to_default_forgets_cell() {
    let mut world = GridWorld::filled_with(STONE);
    world.set_block(BlockPos::ORIGIN, GLASS);
    assert_eq!(world.block_count(), 1);

    world.set_block(BlockPos::ORIGIN, STONE);
    assert_eq!(world.block_count(), 0);
    assert_eq!(world.block_state(BlockPos::new(100, -5, 7)), STONE);
    assert!(world.bounds().is_none());
}

// =============================================================================
// Bounds
// =============================================================================

#[test]
fn bounds_cover_all_set_cells() {
    let world = GridWorld::new()
        .with_block(BlockPos::new(-2, 5, 1), STONE)
        .with_block(BlockPos::new(4, -1, 0), GLASS)
        .with_block(BlockPos::new(0, 0, 9), STONE);
    assert_eq!(
        world.bounds(),
        Some((BlockPos::new(-2, -1, 0), BlockPos::new(4, 5, 9)))
    );
}

// =============================================================================
// Query Interface
// =============================================================================

fn stone_at<W: BlockWorld + ?Sized>(world: &W, pos: BlockPos) -> bool {
    world.block_state(pos) == STONE
}

#[test]
fn queries_through_pointers() {
    let world = GridWorld::new().with_block(BlockPos::ORIGIN, STONE);

    let dynamic: &dyn BlockWorld = &world;
    assert!(stone_at(dynamic, BlockPos::ORIGIN));

    let shared: Arc<dyn BlockWorld + Send + Sync> = Arc::new(world.clone());
    assert!(stone_at(&shared, BlockPos::ORIGIN));

    let boxed: Box<dyn BlockWorld> = Box::new(world);
    assert!(!stone_at(&boxed, BlockPos::new(0, 1, 0)));
}
