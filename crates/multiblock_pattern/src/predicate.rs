//! Predicates: the atomic unit of matching.
//!
//! A [`CellPredicate`] tests the cell under the cursor. Every cell of a
//! pattern holds a [`PatternCell`], which is either an ordinary predicate or
//! the single [`PatternCell::Center`] that anchors the pattern. Count
//! predicates live next to the grid as [`CountMatch`] entries, and
//! [`ContextValidator`]s test a context after a slice or after the sweep.

use std::fmt;
use std::sync::Arc;

use multiblock_foundation::IntRange;

use crate::context::MatchContext;
use crate::cursor::BlockWorldState;

type CellFn = dyn Fn(&mut BlockWorldState<'_>) -> bool + Send + Sync;
type ContextFn = dyn Fn(&MatchContext) -> bool + Send + Sync;

// =============================================================================
// Cell Predicates
// =============================================================================

/// A test over the cell under the cursor.
///
/// Cheap to clone; the test itself is shared.
#[derive(Clone)]
pub struct CellPredicate {
    test: Arc<CellFn>,
    name: Option<Arc<str>>,
}

impl CellPredicate {
    /// Wraps a closure as a predicate.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&mut BlockWorldState<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
            name: None,
        }
    }

    /// Attaches a human-readable name, used in logs and debug output.
    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The name given by [`named`](Self::named), if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Runs the test.
    pub fn test(&self, state: &mut BlockWorldState<'_>) -> bool {
        (self.test)(state)
    }

    /// Matches if either predicate matches. `other` is not run if `self` matches.
    #[must_use]
    pub fn or(self, other: CellPredicate) -> Self {
        let name = join_names(&self, &other, "|");
        let predicate = Self::new(move |s| self.test(s) || other.test(s));
        Self { name, ..predicate }
    }

    /// Matches if both predicates match. `other` is not run if `self` fails.
    #[must_use]
    pub fn and(self, other: CellPredicate) -> Self {
        let name = join_names(&self, &other, "&");
        let predicate = Self::new(move |s| self.test(s) && other.test(s));
        Self { name, ..predicate }
    }

    /// Matches if this predicate does not.
    #[must_use]
    pub fn not(self) -> Self {
        let name = self.name.as_ref().map(|n| Arc::from(format!("!{n}")));
        let predicate = Self::new(move |s| !self.test(s));
        Self { name, ..predicate }
    }

    /// Marks this predicate as the pattern center.
    #[must_use]
    pub fn into_center(self) -> PatternCell {
        PatternCell::Center(self)
    }
}

fn join_names(a: &CellPredicate, b: &CellPredicate, op: &str) -> Option<Arc<str>> {
    match (a.name(), b.name()) {
        (Some(a), Some(b)) => Some(Arc::from(format!("({a} {op} {b})"))),
        _ => None,
    }
}

impl fmt::Debug for CellPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "CellPredicate({name})"),
            None => write!(f, "CellPredicate(<anonymous>)"),
        }
    }
}

// =============================================================================
// Pattern Cells
// =============================================================================

/// One cell of a pattern grid.
#[derive(Clone, Debug)]
pub enum PatternCell {
    /// An ordinary predicate.
    Cell(CellPredicate),
    /// The predicate that anchors the pattern. Exactly one per pattern.
    Center(CellPredicate),
}

impl PatternCell {
    /// The predicate this cell tests.
    #[must_use]
    pub fn predicate(&self) -> &CellPredicate {
        match self {
            Self::Cell(p) | Self::Center(p) => p,
        }
    }

    /// Returns true for the center cell.
    #[must_use]
    pub fn is_center(&self) -> bool {
        matches!(self, Self::Center(_))
    }

    /// Runs the cell's predicate.
    pub fn test(&self, state: &mut BlockWorldState<'_>) -> bool {
        self.predicate().test(state)
    }
}

impl From<CellPredicate> for PatternCell {
    fn from(predicate: CellPredicate) -> Self {
        Self::Cell(predicate)
    }
}

/// A predicate whose matches are counted and checked against a range once
/// the sweep completes.
#[derive(Clone, Debug)]
pub struct CountMatch {
    /// The predicate to count.
    pub predicate: CellPredicate,
    /// Allowed number of matching cells.
    pub range: IntRange,
}

// =============================================================================
// Context Validators
// =============================================================================

/// A test over a context, run after a slice (layer validators) or after the
/// whole sweep (global validators).
#[derive(Clone)]
pub struct ContextValidator {
    test: Arc<ContextFn>,
    name: Option<Arc<str>>,
}

impl ContextValidator {
    /// Wraps a closure as a validator.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&MatchContext) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
            name: None,
        }
    }

    /// Attaches a human-readable name.
    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The name given by [`named`](Self::named), if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Runs the validator.
    #[must_use]
    pub fn test(&self, context: &MatchContext) -> bool {
        (self.test)(context)
    }
}

impl fmt::Debug for ContextValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "ContextValidator({name})"),
            None => write!(f, "ContextValidator(<anonymous>)"),
        }
    }
}
