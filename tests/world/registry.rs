//! Integration tests for BlockRegistry

use multiblock_foundation::BlockId;
use multiblock_world::BlockRegistry;

#[test]
fn ids_are_dense_and_stable() {
    let mut registry = BlockRegistry::new();
    let casing = registry.register("casing").unwrap();
    let frame = registry.register("frame").unwrap();

    assert_eq!(registry.id(BlockRegistry::AIR), Some(BlockId::AIR));
    assert_eq!(casing, BlockId(1));
    assert_eq!(frame, BlockId(2));
    assert_eq!(registry.register("casing").unwrap(), casing);
    assert_eq!(registry.len(), 3);
}

#[test]
fn names_round_trip() {
    let mut registry = BlockRegistry::new();
    let state = registry.state("coke_oven_brick").unwrap();
    assert_eq!(state.meta, 0);
    assert_eq!(registry.name(state.block), Some("coke_oven_brick"));
    assert_eq!(registry.name(BlockId(99)), None);
    assert_eq!(registry.id("missing"), None);
}

#[test]
fn clones_diverge() {
    let mut first = BlockRegistry::new();
    first.register("casing").unwrap();
    let mut second = first.clone();
    second.register("frame").unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 3);
    assert!(!first.is_empty());
}
