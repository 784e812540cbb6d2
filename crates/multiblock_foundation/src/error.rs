//! Error types for the Multiblock system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::facing::RelativeDirection;

/// Convenience alias for results carrying a Multiblock [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Multiblock operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a missing center predicate error.
    #[must_use]
    pub fn missing_center() -> Self {
        Self::new(ErrorKind::MissingCenter)
    }

    /// Creates an ambiguous center predicate error.
    #[must_use]
    pub fn multiple_centers(first: [usize; 3], second: [usize; 3]) -> Self {
        Self::new(ErrorKind::MultipleCenters { first, second })
    }

    /// Creates an invalid repetition range error.
    #[must_use]
    pub fn invalid_repetition(aisle: usize, min: u32, max: u32) -> Self {
        Self::new(ErrorKind::InvalidRepetition { aisle, min, max })
    }

    /// Creates an invalid range error.
    #[must_use]
    pub fn invalid_range(min: u32, max: u32) -> Self {
        Self::new(ErrorKind::InvalidRange { min, max })
    }

    /// Creates an oversized pattern error.
    #[must_use]
    pub fn pattern_too_large(extent: u64) -> Self {
        Self::new(ErrorKind::PatternTooLarge { extent })
    }

    /// Creates a full block registry error.
    #[must_use]
    pub fn registry_full(capacity: u64) -> Self {
        Self::new(ErrorKind::RegistryFull { capacity })
    }

    /// Creates a context type mismatch error.
    #[must_use]
    pub fn context_type_mismatch(key: impl Into<String>, expected: &'static str) -> Self {
        Self::new(ErrorKind::ContextTypeMismatch {
            key: key.into(),
            expected,
        })
    }
}

/// Categorized error kinds.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A pattern was built without any aisles, rows, or columns.
    #[error("pattern has no cells")]
    EmptyPattern,

    /// An aisle does not have the same shape as the first aisle.
    #[error("aisle {aisle} is {rows}x{columns}, expected {expected_rows}x{expected_columns}")]
    RaggedAisle {
        /// Index of the offending aisle.
        aisle: usize,
        /// Rows found in the aisle.
        rows: usize,
        /// Columns found in the widest or narrowest row.
        columns: usize,
        /// Rows required by the first aisle.
        expected_rows: usize,
        /// Columns required by the first aisle.
        expected_columns: usize,
    },

    /// No cell was marked as the pattern center.
    #[error("pattern has no center predicate")]
    MissingCenter,

    /// More than one cell was marked as the pattern center.
    #[error(
        "pattern has more than one center predicate: (aisle, row, column) {first:?} and {second:?}"
    )]
    MultipleCenters {
        /// Position of the first center found, as (aisle, row, column).
        first: [usize; 3],
        /// Position of the second center found, as (aisle, row, column).
        second: [usize; 3],
    },

    /// An aisle repetition range is empty or inverted.
    #[error("invalid repetition range for aisle {aisle}: [{min}, {max}]")]
    InvalidRepetition {
        /// Index of the offending aisle.
        aisle: usize,
        /// Declared minimum.
        min: u32,
        /// Declared maximum.
        max: u32,
    },

    /// A quantity range has `min > max`.
    #[error("invalid range: [{min}, {max}]")]
    InvalidRange {
        /// Declared minimum.
        min: u32,
        /// Declared maximum.
        max: u32,
    },

    /// Two pattern axes were assigned roles on the same world axis.
    #[error("axes {first:?} and {second:?} lie on the same world axis")]
    DegenerateAxes {
        /// The first conflicting role.
        first: RelativeDirection,
        /// The second conflicting role.
        second: RelativeDirection,
    },

    /// A layer validator was registered for an aisle that does not exist.
    #[error("layer validator for aisle {aisle}, but pattern has {aisle_count} aisles")]
    LayerValidatorOutOfRange {
        /// The requested aisle index.
        aisle: usize,
        /// The number of aisles in the pattern.
        aisle_count: usize,
    },

    /// A pattern extent does not fit the signed coordinate range.
    #[error("pattern extent {extent} exceeds the coordinate range")]
    PatternTooLarge {
        /// The offending extent, in cells.
        extent: u64,
    },

    /// A block registry has handed out every id.
    #[error("block registry is full ({capacity} block types)")]
    RegistryFull {
        /// Number of ids the registry can hold.
        capacity: u64,
    },

    /// A context entry holds a value of a different type than requested.
    #[error("context entry {key:?} is not a {expected}")]
    ContextTypeMismatch {
        /// The context key.
        key: String,
        /// Name of the requested type.
        expected: &'static str,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the pattern or structure being processed.
    pub source: Option<String>,
    /// Chain of operations that led to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  while {frame}")?;
            }
        }
        Ok(())
    }
}
