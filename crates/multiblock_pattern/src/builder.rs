//! Pattern construction.
//!
//! Aisles are given as row-major grids of [`PatternCell`]s. Everything that
//! can be checked without a world is checked by [`PatternBuilder::build`], so
//! a [`BlockPattern`] is always well-formed.

use multiblock_foundation::{Error, ErrorContext, ErrorKind, IntRange, Result, StructureAxes};

use crate::pattern::{BlockPattern, CenterOffset};
use crate::predicate::{CellPredicate, ContextValidator, CountMatch, PatternCell};

/// Largest extent along any pattern axis: `i32::MAX`.
const MAX_EXTENT: u64 = 0x7FFF_FFFF;

#[derive(Clone, Debug)]
struct AisleSpec {
    cells: Vec<Vec<PatternCell>>,
    min: u32,
    max: u32,
}

/// Builder for [`BlockPattern`].
#[derive(Clone, Debug, Default)]
pub struct PatternBuilder {
    aisles: Vec<AisleSpec>,
    axes: StructureAxes,
    count_matches: Vec<CountMatch>,
    layer_validators: Vec<(usize, ContextValidator)>,
    validators: Vec<ContextValidator>,
    name: Option<String>,
}

impl PatternBuilder {
    /// Creates an empty builder with the default axes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the axis roles of columns, rows and aisles.
    #[must_use]
    pub fn axes(mut self, axes: StructureAxes) -> Self {
        self.axes = axes;
        self
    }

    /// Appends an aisle that occurs exactly once.
    #[must_use]
    pub fn aisle(self, rows: Vec<Vec<PatternCell>>) -> Self {
        self.aisle_repeat(rows, 1, 1)
    }

    /// Appends an aisle that repeats between `min` and `max` times.
    #[must_use]
    pub fn aisle_repeat(mut self, rows: Vec<Vec<PatternCell>>, min: u32, max: u32) -> Self {
        self.aisles.push(AisleSpec {
            cells: rows,
            min,
            max,
        });
        self
    }

    /// Registers a count predicate: the number of matched cells it holds for
    /// must lie in `range`.
    #[must_use]
    pub fn count(mut self, predicate: CellPredicate, range: IntRange) -> Self {
        self.count_matches.push(CountMatch { predicate, range });
        self
    }

    /// Registers a validator run on the layer context after every matched
    /// slice of `aisle`. A later registration for the same aisle replaces
    /// an earlier one.
    #[must_use]
    pub fn layer_validator(mut self, aisle: usize, validator: ContextValidator) -> Self {
        self.layer_validators.push((aisle, validator));
        self
    }

    /// Registers a validator run on the global context after the sweep.
    #[must_use]
    pub fn validator(mut self, validator: ContextValidator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Names the pattern, for logs and error context.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Validates the pattern and builds it.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or ragged, a repetition
    /// range is empty or inverted, a layer validator names a missing aisle,
    /// an extent exceeds the coordinate range, or there is not exactly one
    /// center cell.
    pub fn build(self) -> Result<BlockPattern> {
        let context = self.name.as_ref().map(|name| {
            ErrorContext::new()
                .with_source(name.clone())
                .with_frame("building pattern")
        });
        self.assemble().map_err(|err| match context {
            Some(context) => err.with_context(context),
            None => err,
        })
    }

    fn assemble(self) -> Result<BlockPattern> {
        let (rows, columns) = self.check_shape()?;
        self.check_repetitions()?;
        self.check_layer_validators()?;
        self.check_extents(rows, columns)?;
        let center = self.find_center()?;

        let repetitions = self
            .aisles
            .iter()
            .map(|a| IntRange::new(a.min, a.max))
            .collect::<Result<Vec<_>>>()?;

        let mut layer_validators = vec![None; self.aisles.len()];
        for (aisle, validator) in self.layer_validators {
            layer_validators[aisle] = Some(validator);
        }

        let aisles = self.aisles.len();
        let cells = self
            .aisles
            .into_iter()
            .flat_map(|a| a.cells.into_iter().flatten())
            .collect();

        Ok(BlockPattern {
            cells,
            aisles,
            rows,
            columns,
            repetitions,
            layer_validators,
            count_matches: self.count_matches,
            validators: self.validators,
            axes: self.axes,
            center,
            name: self.name,
        })
    }

    /// Returns (rows, columns) shared by every aisle.
    fn check_shape(&self) -> Result<(usize, usize)> {
        let Some(first) = self.aisles.first() else {
            return Err(Error::new(ErrorKind::EmptyPattern));
        };
        let rows = first.cells.len();
        let columns = first.cells.first().map_or(0, Vec::len);
        if rows == 0 || columns == 0 {
            return Err(Error::new(ErrorKind::EmptyPattern));
        }

        for (index, aisle) in self.aisles.iter().enumerate() {
            let odd_row = aisle.cells.iter().map(Vec::len).find(|&n| n != columns);
            if aisle.cells.len() != rows || odd_row.is_some() {
                return Err(Error::new(ErrorKind::RaggedAisle {
                    aisle: index,
                    rows: aisle.cells.len(),
                    columns: odd_row.unwrap_or(columns),
                    expected_rows: rows,
                    expected_columns: columns,
                }));
            }
        }
        Ok((rows, columns))
    }

    fn check_repetitions(&self) -> Result<()> {
        for (index, aisle) in self.aisles.iter().enumerate() {
            if aisle.min > aisle.max || aisle.max == 0 {
                return Err(Error::invalid_repetition(index, aisle.min, aisle.max));
            }
        }
        Ok(())
    }

    fn check_layer_validators(&self) -> Result<()> {
        let aisle_count = self.aisles.len();
        match self.layer_validators.iter().find(|(a, _)| *a >= aisle_count) {
            Some(&(aisle, _)) => Err(Error::new(ErrorKind::LayerValidatorOutOfRange {
                aisle,
                aisle_count,
            })),
            None => Ok(()),
        }
    }

    fn check_extents(&self, rows: usize, columns: usize) -> Result<()> {
        let sweep: u64 = self.aisles.iter().map(|a| u64::from(a.max)).sum();
        let rows = u64::try_from(rows).unwrap_or(u64::MAX);
        let columns = u64::try_from(columns).unwrap_or(u64::MAX);
        match [rows, columns, sweep].into_iter().find(|&e| e > MAX_EXTENT) {
            Some(extent) => Err(Error::pattern_too_large(extent)),
            None => Ok(()),
        }
    }

    fn find_center(&self) -> Result<CenterOffset> {
        let mut found: Option<[usize; 3]> = None;
        for (a, aisle) in self.aisles.iter().enumerate() {
            for (r, row) in aisle.cells.iter().enumerate() {
                for (c, cell) in row.iter().enumerate() {
                    if !cell.is_center() {
                        continue;
                    }
                    if let Some(first) = found {
                        return Err(Error::multiple_centers(first, [a, r, c]));
                    }
                    found = Some([a, r, c]);
                }
            }
        }
        let [aisle, row, column] = found.ok_or_else(Error::missing_center)?;

        let before = &self.aisles[..aisle];
        let min_z: u64 = before.iter().map(|a| u64::from(a.min)).sum();
        let max_z: u64 = before.iter().map(|a| u64::from(a.max)).sum();
        let coord = |v: u64| i32::try_from(v).map_err(|_| Error::pattern_too_large(v));

        Ok(CenterOffset {
            column,
            row,
            aisle,
            min_z: coord(min_z)?,
            max_z: coord(max_z)?,
        })
    }
}
