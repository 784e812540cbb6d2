//! Integration tests for the matcher sweep
//!
//! Tests single-cell patterns, grid edges, repetition bounds, count ranges,
//! validators, and determinism.

use std::sync::Arc;
use std::thread;

use multiblock_foundation::{BlockPos, BlockState, Facing, IntRange, Orientation};
use multiblock_pattern::{
    BlockPattern, CellPredicate, ContextValidator, MatchFailure, MatcherConfig, PatternBuilder,
    PatternMatcher, check_pattern_at, predicates,
};
use multiblock_world::GridWorld;
use proptest::prelude::*;

use crate::common::{CASING, CORE, FRAME, aisle, cell};

/// Core, then an aisle of casings repeated `[min, max]` times, then a frame cap.
fn column(min: u32, max: u32) -> BlockPattern {
    PatternBuilder::new()
        .aisle(aisle(&["S"]))
        .aisle_repeat(aisle(&["C"]), min, max)
        .aisle(vec![vec![
            predicates::state(FRAME).or(predicates::state(CASING)).into(),
        ]])
        .build()
        .unwrap()
}

/// Core at the origin followed northwards by `casings` casings and a frame.
fn column_world(casings: i32) -> GridWorld {
    let mut world = GridWorld::new();
    world.set_block(BlockPos::ORIGIN, CORE);
    for z in 1..=casings {
        world.set_block(BlockPos::new(0, 0, -z), CASING);
    }
    world.set_block(BlockPos::new(0, 0, -casings - 1), FRAME);
    world
}

// =============================================================================
// Single Cell
// =============================================================================

proptest! {
    #[test]
    fn single_cell_matches_iff_predicate_holds(
        x in -50i32..50,
        y in -50i32..50,
        z in -50i32..50,
        core in prop::bool::ANY,
        orientation in prop::sample::select(Orientation::ALL.to_vec()),
    ) {
        let pattern = PatternBuilder::new().aisle(aisle(&["S"])).build().unwrap();
        let anchor = BlockPos::new(x, y, z);
        let state = if core { CORE } else { CASING };
        let world = GridWorld::new().with_block(anchor, state);

        let matched = check_pattern_at(&pattern, &world, anchor, orientation).is_some();
        prop_assert_eq!(matched, core);
    }
}

// =============================================================================
// Grid Edges
// =============================================================================

#[test]
fn pattern_reaching_past_grid_edge_does_not_match() {
    let pattern = PatternBuilder::new()
        .aisle(aisle(&["S"]))
        .aisle(aisle(&[" "]))
        .build()
        .unwrap();
    let anchor = BlockPos::new(0, 0, i32::MIN);
    let world = GridWorld::new().with_block(anchor, CORE);

    assert!(check_pattern_at(&pattern, &world, anchor, Orientation::North).is_none());
    assert!(check_pattern_at(&pattern, &world, anchor, Orientation::South).is_some());
}

#[test]
fn neighbor_past_grid_edge_reads_as_air() {
    let roofless = CellPredicate::new(|s| s.offset_state(Facing::Up).is_air())
        .and(predicates::state(CORE))
        .into_center();
    let pattern = PatternBuilder::new()
        .aisle(vec![vec![roofless]])
        .build()
        .unwrap();
    let anchor = BlockPos::new(i32::MAX, i32::MAX, i32::MAX);
    let world = GridWorld::filled_with(CASING).with_block(anchor, CORE);

    for orientation in Orientation::ALL {
        assert!(check_pattern_at(&pattern, &world, anchor, orientation).is_some());
    }
}

// =============================================================================
// Repetition Bounds
// =============================================================================

#[test]
fn repetition_lower_bound() {
    let pattern = column(2, 4);
    assert!(check_pattern_at(&pattern, &column_world(1), BlockPos::ORIGIN, Orientation::North).is_none());
    assert!(check_pattern_at(&pattern, &column_world(2), BlockPos::ORIGIN, Orientation::North).is_some());
}

#[test]
fn repetition_within_bounds() {
    let pattern = column(2, 4);
    for casings in 2..=4 {
        let report = pattern.explain_at(&column_world(casings), BlockPos::ORIGIN, Orientation::North);
        assert!(report.is_match(), "{casings} casings: {:?}", report.failure());
        // core + casings + cap
        assert_eq!(report.stats.slices_matched, u64::try_from(casings).unwrap() + 2);
    }
}

#[test]
fn repetition_stops_at_upper_bound() {
    // Five casings: four are taken by the repeating aisle, the fifth by the cap.
    let pattern = column(2, 4);
    let report = pattern.explain_at(&column_world(5), BlockPos::ORIGIN, Orientation::North);
    assert!(report.is_match());
    assert_eq!(report.stats.slices_matched, 6);
}

#[test]
fn repetition_upper_bound_needs_following_aisle() {
    // Six casings: the cap takes the fifth and the sixth is never visited.
    let pattern = column(2, 4);
    assert!(check_pattern_at(&pattern, &column_world(6), BlockPos::ORIGIN, Orientation::North).is_some());

    // With a cap that insists on a frame, five casings leave a casing where
    // the frame must be.
    let strict = PatternBuilder::new()
        .aisle(aisle(&["S"]))
        .aisle_repeat(aisle(&["C"]), 2, 4)
        .aisle(aisle(&["X"]))
        .build()
        .unwrap();
    assert!(check_pattern_at(&strict, &column_world(4), BlockPos::ORIGIN, Orientation::North).is_some());
    assert!(check_pattern_at(&strict, &column_world(5), BlockPos::ORIGIN, Orientation::North).is_none());
}

// =============================================================================
// Count Ranges
// =============================================================================

#[test]
fn count_range_boundaries() {
    // Any cells along a run of eight; casings among them are counted.
    let pattern = PatternBuilder::new()
        .aisle(aisle(&["S"]))
        .aisle_repeat(aisle(&[" "]), 8, 8)
        .count(predicates::state(CASING), IntRange::new(3, 5).unwrap())
        .build()
        .unwrap();

    for casings in 0..=8 {
        let mut world = GridWorld::new().with_block(BlockPos::ORIGIN, CORE);
        for z in 1..=casings {
            world.set_block(BlockPos::new(0, 0, -z), CASING);
        }
        let report = pattern.explain_at(&world, BlockPos::ORIGIN, Orientation::North);
        let expected = (3..=5).contains(&casings);
        assert_eq!(report.is_match(), expected, "{casings} casings");
        if !expected {
            assert_eq!(
                report.failure(),
                Some(&MatchFailure::CountOutOfRange {
                    index: 0,
                    count: u32::try_from(casings).unwrap(),
                    range: IntRange::new(3, 5).unwrap(),
                })
            );
        }
    }
}

#[test]
fn counts_ignore_failed_slices() {
    // The last row is tested as a casing slice first: two casings pass before
    // the frame fails it. Only the cap's own casings may be counted.
    let pattern = PatternBuilder::new()
        .aisle(aisle(&["S  "]))
        .aisle_repeat(aisle(&["CCC"]), 1, 3)
        .aisle(aisle(&["CCX"]))
        .count(predicates::state(CASING), IntRange::exactly(5))
        .build()
        .unwrap();

    // Facing north, columns run west from the core.
    let mut world = GridWorld::new();
    world.set_block(BlockPos::ORIGIN, CORE);
    world.fill(BlockPos::new(-2, 0, -1), BlockPos::new(0, 0, -1), CASING);
    world.fill(BlockPos::new(-1, 0, -2), BlockPos::new(0, 0, -2), CASING);
    world.set_block(BlockPos::new(-2, 0, -2), FRAME);

    let report = pattern.explain_at(&world, BlockPos::ORIGIN, Orientation::North);
    assert!(report.is_match(), "{:?}", report.failure());
    assert_eq!(report.stats.slices_matched, 3);
}

// =============================================================================
// Validators
// =============================================================================

#[test]
fn layer_validator_sees_only_its_slice() {
    let pattern = PatternBuilder::new()
        .aisle(aisle(&["S"]))
        .aisle_repeat(
            vec![vec![
                predicates::counted_in_layer("layer", predicates::state(CASING)).into(),
            ]],
            1,
            4,
        )
        .layer_validator(
            1,
            ContextValidator::new(|ctx| ctx.get_or_default("layer", 0_i64) == 1),
        )
        .aisle(aisle(&["X"]))
        .build()
        .unwrap();

    let world = column_world(3);
    assert!(check_pattern_at(&pattern, &world, BlockPos::ORIGIN, Orientation::North).is_some());
}

#[test]
fn failing_global_validator_rejects() {
    let pattern = PatternBuilder::new()
        .aisle(aisle(&["S"]))
        .validator(ContextValidator::new(|ctx| ctx.contains_key("never set")))
        .build()
        .unwrap();
    let world = GridWorld::new().with_block(BlockPos::ORIGIN, CORE);

    let report = pattern.explain_at(&world, BlockPos::ORIGIN, Orientation::North);
    assert_eq!(report.failure(), Some(&MatchFailure::Validator { index: 0 }));
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn repeated_checks_agree() {
    let pattern = column(2, 4);
    let world = column_world(3);
    let matcher = PatternMatcher::new(MatcherConfig::quiet());

    let first = matcher.explain(&pattern, &world, BlockPos::ORIGIN, Orientation::North);
    let second = matcher.explain(&pattern, &world, BlockPos::ORIGIN, Orientation::North);
    assert_eq!(first.is_match(), second.is_match());
    assert_eq!(first.stats, second.stats);
    assert_eq!(
        first.into_context().map(|c| c.len()),
        second.into_context().map(|c| c.len())
    );
}

#[test]
fn explain_agrees_with_check() {
    let pattern = column(2, 4);
    for casings in 0..7 {
        let world = column_world(casings);
        let matcher = PatternMatcher::default();
        assert_eq!(
            matcher
                .check(&pattern, &world, BlockPos::ORIGIN, Orientation::North)
                .is_some(),
            matcher
                .explain(&pattern, &world, BlockPos::ORIGIN, Orientation::North)
                .is_match(),
        );
    }
}

#[test]
fn matching_does_not_touch_world() {
    let pattern = column(2, 4);
    let world = column_world(3);
    let before: Vec<(BlockPos, BlockState)> = {
        let mut blocks: Vec<_> = world.blocks().collect();
        blocks.sort_by_key(|(p, _)| p.to_array());
        blocks
    };
    let _ = check_pattern_at(&pattern, &world, BlockPos::ORIGIN, Orientation::North);
    let mut after: Vec<_> = world.blocks().collect();
    after.sort_by_key(|(p, _)| p.to_array());
    assert_eq!(before, after);
}

#[test]
fn patterns_are_shared_across_threads() {
    let pattern = Arc::new(column(2, 4));
    let world = Arc::new(column_world(3));

    let handles: Vec<_> = Orientation::ALL
        .into_iter()
        .map(|orientation| {
            let pattern = Arc::clone(&pattern);
            let world = Arc::clone(&world);
            thread::spawn(move || {
                check_pattern_at(&pattern, &*world, BlockPos::ORIGIN, orientation).is_some()
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, false, false, false]);
}

#[test]
fn verbose_config_still_matches() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("multiblock_pattern=trace")
        .with_test_writer()
        .try_init();

    let pattern = column(2, 4);
    let matcher = PatternMatcher::new(MatcherConfig::verbose());
    assert!(matcher
        .check(&pattern, &column_world(3), BlockPos::ORIGIN, Orientation::North)
        .is_some());
    assert!(matcher
        .check(&pattern, &column_world(1), BlockPos::ORIGIN, Orientation::North)
        .is_none());
}

#[test]
fn center_cell_uses_legend() {
    assert!(cell('S').is_center());
    assert!(!cell('C').is_center());
}
