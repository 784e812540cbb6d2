//! The immutable block pattern.

use std::fmt;

use multiblock_foundation::{BlockPos, IntRange, Orientation, StructureAxes};
use multiblock_world::BlockWorld;

use crate::context::MatchContext;
use crate::explain::MatchReport;
use crate::matcher::PatternMatcher;
use crate::predicate::{ContextValidator, CountMatch, PatternCell};

/// Where the center predicate sits inside the pattern.
///
/// `min_z` and `max_z` are the summed minimum and maximum repetitions of the
/// aisles before the center aisle, so the center aisle's first repetition
/// lies at aisle coordinate 0 relative to the anchor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CenterOffset {
    /// Column index of the center cell.
    pub column: usize,
    /// Row index of the center cell.
    pub row: usize,
    /// Aisle index of the center cell.
    pub aisle: usize,
    /// Fewest slices that can precede the center aisle.
    pub min_z: i32,
    /// Most slices that can precede the center aisle.
    pub max_z: i32,
}

/// A 3D grid of predicates with repetition ranges and validators.
///
/// Built with [`PatternBuilder`](crate::PatternBuilder); immutable and
/// shareable across threads afterwards.
#[derive(Clone)]
pub struct BlockPattern {
    /// Cells in (aisle, row, column) order.
    pub(crate) cells: Vec<PatternCell>,
    pub(crate) aisles: usize,
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) repetitions: Vec<IntRange>,
    /// Indexed by aisle.
    pub(crate) layer_validators: Vec<Option<ContextValidator>>,
    pub(crate) count_matches: Vec<CountMatch>,
    pub(crate) validators: Vec<ContextValidator>,
    pub(crate) axes: StructureAxes,
    pub(crate) center: CenterOffset,
    pub(crate) name: Option<String>,
}

impl BlockPattern {
    /// Number of aisles.
    #[must_use]
    pub fn aisle_count(&self) -> usize {
        self.aisles
    }

    /// Number of rows per aisle.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns per row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Cell at (aisle, row, column).
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    #[must_use]
    pub fn cell(&self, aisle: usize, row: usize, column: usize) -> &PatternCell {
        assert!(
            aisle < self.aisles && row < self.rows && column < self.columns,
            "cell ({aisle}, {row}, {column}) out of bounds"
        );
        &self.cells[(aisle * self.rows + row) * self.columns + column]
    }

    /// Repetition range of each aisle.
    #[must_use]
    pub fn repetitions(&self) -> &[IntRange] {
        &self.repetitions
    }

    /// The layer validator of `aisle`, if one was registered.
    #[must_use]
    pub fn layer_validator(&self, aisle: usize) -> Option<&ContextValidator> {
        self.layer_validators.get(aisle).and_then(Option::as_ref)
    }

    /// Count predicates with their ranges, in registration order.
    #[must_use]
    pub fn count_matches(&self) -> &[CountMatch] {
        &self.count_matches
    }

    /// Global validators, in registration order.
    #[must_use]
    pub fn validators(&self) -> &[ContextValidator] {
        &self.validators
    }

    /// Axis roles of columns, rows and aisles.
    #[must_use]
    pub fn axes(&self) -> StructureAxes {
        self.axes
    }

    /// Position of the center predicate.
    #[must_use]
    pub fn center_offset(&self) -> CenterOffset {
        self.center
    }

    /// The name given at construction, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Tests whether this pattern is realized in `world` with its center at
    /// `anchor`, returning the global context on success.
    ///
    /// Uses the default [`MatcherConfig`](crate::MatcherConfig).
    #[must_use]
    pub fn check_pattern_at(
        &self,
        world: &dyn BlockWorld,
        anchor: BlockPos,
        orientation: Orientation,
    ) -> Option<MatchContext> {
        PatternMatcher::default().check(self, world, anchor, orientation)
    }

    /// Like [`check_pattern_at`](Self::check_pattern_at), but reports why a
    /// failed attempt failed.
    #[must_use]
    pub fn explain_at(
        &self,
        world: &dyn BlockWorld,
        anchor: BlockPos,
        orientation: Orientation,
    ) -> MatchReport {
        PatternMatcher::default().explain(self, world, anchor, orientation)
    }
}

impl fmt::Debug for BlockPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockPattern")
            .field("name", &self.name)
            .field("aisles", &self.aisles)
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("repetitions", &self.repetitions)
            .field("center", &self.center)
            .field("count_matches", &self.count_matches.len())
            .field("validators", &self.validators.len())
            .finish_non_exhaustive()
    }
}
