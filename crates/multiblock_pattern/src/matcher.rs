//! The pattern matcher.
//!
//! A match attempt sweeps the pattern aisle by aisle. Each aisle is tried as
//! a sequence of slices at increasing aisle coordinates `z`, where `z = 0` is
//! the slice containing the anchor:
//!
//! 1. Until some slice has matched, a failing slice only moves `z` forward,
//!    searching for where the leading aisles begin. The search window is
//!    `-max_z ..= -min_z` of the [`CenterOffset`](crate::CenterOffset).
//! 2. Once aligned, each aisle repeats up to its maximum. A failure before
//!    the minimum restarts the whole sweep one step further along the
//!    window, with the global context and counters cleared. A failure after
//!    the minimum ends that aisle and the next aisle starts at the same `z`.
//! 3. After the last aisle, count ranges and then global validators are
//!    checked.
//!
//! The global context is cleared on every restart and also whenever a slice
//! fails before alignment, so each leading attempt starts empty. The layer
//! context is cleared at the start of every slice.
//!
//! When the window runs out after one or more restarts, the failure reported
//! is the shortfall that caused the last restart.
//!
//! A cell whose world position would fall outside the `i32` grid fails like
//! any other mismatch.
//!
//! Writes made by the predicates of a failed slice after alignment are not
//! rolled back. In particular, the slice that ends an aisle's repetition may
//! record ability parts that lie outside the matched structure, and those
//! parts stay in the returned context.

use multiblock_foundation::{BlockPos, Orientation};
use multiblock_world::BlockWorld;
use tracing::{debug, trace};

use crate::config::MatcherConfig;
use crate::context::MatchContext;
use crate::cursor::BlockWorldState;
use crate::explain::{MatchFailure, MatchReport, MatchStats};
use crate::pattern::BlockPattern;

/// Matches patterns against worlds.
#[derive(Clone, Debug, Default)]
pub struct PatternMatcher {
    config: MatcherConfig,
}

impl PatternMatcher {
    /// Creates a matcher with the given configuration.
    #[must_use]
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// The matcher's configuration.
    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Tests whether `pattern` is realized in `world` with its center at
    /// `anchor`, returning the global context on success.
    #[must_use]
    pub fn check(
        &self,
        pattern: &BlockPattern,
        world: &dyn BlockWorld,
        anchor: BlockPos,
        orientation: Orientation,
    ) -> Option<MatchContext> {
        self.explain(pattern, world, anchor, orientation)
            .into_context()
    }

    /// Like [`check`](Self::check), but reports why a failed attempt failed
    /// and how much work the sweep did.
    #[must_use]
    pub fn explain(
        &self,
        pattern: &BlockPattern,
        world: &dyn BlockWorld,
        anchor: BlockPos,
        orientation: Orientation,
    ) -> MatchReport {
        let mut sweep = Sweep {
            config: &self.config,
            pattern,
            anchor,
            orientation,
            cursor: BlockWorldState::new(world, anchor),
            counts: vec![0; pattern.count_matches().len()],
            staged: vec![0; pattern.count_matches().len()],
            stats: MatchStats::default(),
        };
        let outcome = sweep.run();
        let stats = sweep.stats;
        let outcome = outcome.map(|()| sweep.cursor.into_match_context());

        if let Err(failure) = &outcome {
            if self.config.log_failures {
                debug!(
                    pattern = pattern.name().unwrap_or("<unnamed>"),
                    %anchor,
                    ?orientation,
                    %failure,
                    cells = stats.cells_tested,
                    restarts = stats.restarts,
                    "pattern did not match"
                );
            }
        }

        MatchReport { outcome, stats }
    }
}

/// Signed offset of a grid index from the center index.
///
/// Pattern extents are checked to fit `i32` at build time.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn local(index: usize, center: usize) -> i32 {
    index as i32 - center as i32
}

/// State of one match attempt.
struct Sweep<'a, 'w> {
    config: &'a MatcherConfig,
    pattern: &'a BlockPattern,
    anchor: BlockPos,
    orientation: Orientation,
    cursor: BlockWorldState<'w>,
    /// Committed count-predicate totals.
    counts: Vec<u32>,
    /// Count-predicate hits of the slice being tested.
    staged: Vec<u32>,
    stats: MatchStats,
}

impl Sweep<'_, '_> {
    fn run(&mut self) -> Result<(), MatchFailure> {
        let pattern = self.pattern;
        let center = pattern.center_offset();

        let mut next_start = -center.max_z;
        let mut z = next_start;
        next_start += 1;
        let mut aligned = false;
        let mut aisle = 0;
        let mut shortfall = None;

        'aisles: while aisle < pattern.aisle_count() {
            let range = pattern.repetitions()[aisle];
            let mut matched = 0_u32;

            loop {
                let in_bounds = if aligned {
                    matched < range.max()
                } else {
                    z <= -center.min_z
                };
                if !in_bounds {
                    break;
                }

                if self.match_slice(aisle, z) {
                    for (total, hits) in self.counts.iter_mut().zip(&self.staged) {
                        *total = total.saturating_add(*hits);
                    }
                    aligned = true;
                    self.stats.slices_matched += 1;
                    z += 1;
                    matched += 1;

                    if let Some(validator) = pattern.layer_validator(aisle) {
                        if !validator.test(self.cursor.layer_context()) {
                            return Err(MatchFailure::LayerValidator { aisle });
                        }
                    }
                } else if !aligned {
                    z += 1;
                    self.stats.alignment_retries += 1;
                    self.cursor.match_context_mut().clear();
                } else if matched < range.min() {
                    if self.config.log_restarts {
                        debug!(aisle, z, next_start, "restarting leading alignment");
                    }
                    shortfall = Some(MatchFailure::InsufficientRepetitions {
                        aisle,
                        matched,
                        min: range.min(),
                    });
                    aisle = 0;
                    z = next_start;
                    next_start += 1;
                    aligned = false;
                    self.cursor.match_context_mut().clear();
                    self.counts.fill(0);
                    self.stats.restarts += 1;
                    continue 'aisles;
                } else {
                    break;
                }
            }

            if matched < range.min() {
                return Err(if aisle == 0 && !aligned {
                    shortfall.unwrap_or(MatchFailure::NoAlignment)
                } else {
                    MatchFailure::InsufficientRepetitions {
                        aisle,
                        matched,
                        min: range.min(),
                    }
                });
            }
            aisle += 1;
        }

        for (index, (count, check)) in self.counts.iter().zip(pattern.count_matches()).enumerate()
        {
            if !check.range.contains(*count) {
                return Err(MatchFailure::CountOutOfRange {
                    index,
                    count: *count,
                    range: check.range,
                });
            }
        }

        let context = self.cursor.match_context();
        match pattern.validators().iter().position(|v| !v.test(context)) {
            Some(index) => Err(MatchFailure::Validator { index }),
            None => Ok(()),
        }
    }

    /// Tests every cell of `aisle` at aisle coordinate `z`, staging count
    /// hits. Stops at the first failing cell.
    fn match_slice(&mut self, aisle: usize, z: i32) -> bool {
        let pattern = self.pattern;
        let center = pattern.center_offset();
        let axes = pattern.axes();

        self.cursor.layer_context_mut().clear();
        self.staged.fill(0);

        for row in 0..pattern.row_count() {
            let y = local(row, center.row);
            for column in 0..pattern.column_count() {
                let x = local(column, center.column);
                self.stats.cells_tested += 1;
                let offset = axes.transform(x, y, z, self.orientation);
                let Some(pos) = self.anchor.checked_add(offset) else {
                    if self.config.trace_cells {
                        trace!(aisle, row, column, z, %offset, "cell lies outside the grid");
                    }
                    return false;
                };
                self.cursor.reposition(pos);

                let cell = pattern.cell(aisle, row, column);
                let ok = cell.test(&mut self.cursor);
                if self.config.trace_cells {
                    trace!(
                        aisle,
                        row,
                        column,
                        z,
                        %pos,
                        state = ?self.cursor.block_state(),
                        predicate = cell.predicate().name().unwrap_or("<anonymous>"),
                        ok,
                        "tested cell"
                    );
                }
                if !ok {
                    return false;
                }

                for (hits, check) in self.staged.iter_mut().zip(pattern.count_matches()) {
                    if check.predicate.test(&mut self.cursor) {
                        *hits += 1;
                    }
                }
            }
        }
        true
    }
}
