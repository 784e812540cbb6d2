//! Integration tests for pattern construction
//!
//! Tests builder validation and the shape accessors of built patterns.

use multiblock_foundation::{ErrorKind, IntRange, RelativeDirection, StructureAxes};
use multiblock_pattern::{ContextValidator, PatternBuilder};

use crate::common::{aisle, build};

// =============================================================================
// Shape
// =============================================================================

#[test]
fn shape_accessors() {
    let pattern = build(&[&["XXX", "CCC"], &["XXX", "CSC"]]);
    assert_eq!(pattern.aisle_count(), 2);
    assert_eq!(pattern.row_count(), 2);
    assert_eq!(pattern.column_count(), 3);
    assert_eq!(pattern.axes(), StructureAxes::default());

    let center = pattern.center_offset();
    assert_eq!((center.aisle, center.row, center.column), (1, 1, 1));
    assert_eq!((center.min_z, center.max_z), (1, 1));
    assert!(pattern.cell(1, 1, 1).is_center());
}

#[test]
fn repetitions_are_recorded_per_aisle() {
    let pattern = PatternBuilder::new()
        .aisle(aisle(&["C"]))
        .aisle_repeat(aisle(&["C"]), 2, 4)
        .aisle(aisle(&["S"]))
        .build()
        .unwrap();

    assert_eq!(
        pattern.repetitions(),
        &[
            IntRange::exactly(1),
            IntRange::new(2, 4).unwrap(),
            IntRange::exactly(1)
        ]
    );
    let center = pattern.center_offset();
    assert_eq!((center.min_z, center.max_z), (3, 5));
}

#[test]
fn custom_axes_are_kept() {
    let axes = StructureAxes::new(
        RelativeDirection::Right,
        RelativeDirection::Down,
        RelativeDirection::Back,
    )
    .unwrap();
    let pattern = PatternBuilder::new()
        .axes(axes)
        .aisle(aisle(&["S"]))
        .named("blast-furnace")
        .build()
        .unwrap();
    assert_eq!(pattern.axes(), axes);
    assert_eq!(pattern.name(), Some("blast-furnace"));
}

// =============================================================================
// Construction Errors
// =============================================================================

#[test]
fn missing_center_is_rejected() {
    let err = PatternBuilder::new()
        .aisle(aisle(&["XXX", "CCC"]))
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingCenter));
}

#[test]
fn multiple_centers_are_rejected() {
    let err = PatternBuilder::new()
        .aisle(aisle(&["XSX"]))
        .aisle(aisle(&["XSX"]))
        .build()
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MultipleCenters {
            first: [0, 0, 1],
            second: [1, 0, 1]
        }
    ));
}

#[test]
fn inverted_repetition_is_rejected() {
    let err = PatternBuilder::new()
        .aisle(aisle(&["S"]))
        .aisle_repeat(aisle(&["C"]), 4, 2)
        .build()
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidRepetition {
            aisle: 1,
            min: 4,
            max: 2
        }
    ));
}

#[test]
fn zero_repetition_is_rejected() {
    let err = PatternBuilder::new()
        .aisle_repeat(aisle(&["S"]), 0, 0)
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidRepetition { .. }));
}

#[test]
fn ragged_aisle_is_rejected() {
    let err = PatternBuilder::new()
        .aisle(aisle(&["XXX", "CSC"]))
        .aisle(aisle(&["XXX", "CC"]))
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RaggedAisle { aisle: 1, .. }));
}

#[test]
fn degenerate_axes_are_rejected() {
    let err = StructureAxes::new(
        RelativeDirection::Left,
        RelativeDirection::Right,
        RelativeDirection::Up,
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DegenerateAxes { .. }));
}

#[test]
fn layer_validator_must_name_an_aisle() {
    let err = PatternBuilder::new()
        .aisle(aisle(&["S"]))
        .layer_validator(3, ContextValidator::new(|_| true))
        .build()
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::LayerValidatorOutOfRange {
            aisle: 3,
            aisle_count: 1
        }
    ));
}

#[test]
fn named_pattern_errors_mention_the_name() {
    let err = PatternBuilder::new()
        .named("large-boiler")
        .aisle(aisle(&["C"]))
        .build()
        .unwrap_err();
    let context = err.context.expect("named builders attach context");
    assert!(format!("{context}").contains("in large-boiler"));
}
