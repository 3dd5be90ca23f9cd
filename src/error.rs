//! Error types for matriz operations.
//!
//! Every fallible operation in the crate returns [`Result`]. The error set
//! is closed: each variant corresponds to one precondition a caller can
//! violate, and carries enough context to report the violation without
//! consulting the call site.

use std::fmt;

/// Main error type for matriz operations.
///
/// # Examples
///
/// ```
/// use matriz::error::Error;
///
/// let err = Error::ShapeMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("shape mismatch"));
/// ```
#[derive(Debug)]
pub enum Error {
    /// Zero row or column count where a positive one is required.
    InvalidDimension {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Operand shapes incompatible for the requested operation.
    ShapeMismatch {
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// A nested sequence has rows of unequal length.
    JaggedInput {
        /// Zero-based row where the disagreement was found
        row: usize,
        /// Width fixed by the first row
        expected: usize,
        /// Width of the offending row
        actual: usize,
    },

    /// Axis index, row, or column outside its valid interval.
    IndexOutOfRange {
        /// Index as passed by the caller (may be negative)
        index: isize,
        /// Extent of the dimension being indexed
        extent: usize,
    },

    /// Axis selector outside {0, 1}.
    InvalidAxis {
        /// Selector as passed by the caller
        axis: i64,
    },

    /// Random fill bounds with `lo >= hi`.
    InvalidRange {
        /// Lower bound
        lo: f64,
        /// Upper bound
        hi: f64,
    },

    /// Division by a zero scalar or any zero element of a divisor.
    DivisionByZero,

    /// An operation that needs at least one element received none.
    EmptyInput {
        /// What was empty
        what: &'static str,
    },

    /// A CSV field could not be parsed as a 64-bit float.
    ParseError {
        /// One-based line number of the offending record
        line: usize,
        /// The unparseable field text
        value: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),
}

impl Error {
    /// Builds a [`Error::ShapeMismatch`] from two `(rows, cols)` pairs.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Error::ShapeMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Builds a [`Error::ShapeMismatch`] from two lengths.
    #[must_use]
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Error::ShapeMismatch {
            expected: format!("len {expected}"),
            actual: format!("len {actual}"),
        }
    }

    /// Builds a [`Error::IndexOutOfRange`] for a signed index.
    #[must_use]
    pub fn index_out_of_range(index: isize, extent: usize) -> Self {
        Error::IndexOutOfRange { index, extent }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimension { rows, cols } => {
                write!(f, "invalid dimension: {rows}x{cols}, both must be >= 1")
            }
            Error::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected}, got {actual}")
            }
            Error::JaggedInput {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "jagged input: row {row} has {actual} elements, expected {expected}"
                )
            }
            Error::IndexOutOfRange { index, extent } => {
                write!(f, "index {index} out of range for extent {extent}")
            }
            Error::InvalidAxis { axis } => {
                write!(f, "invalid axis {axis}: must be 0 (row) or 1 (column)")
            }
            Error::InvalidRange { lo, hi } => {
                write!(f, "invalid range: lo {lo} must be < hi {hi}")
            }
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::EmptyInput { what } => write!(f, "empty input: {what}"),
            Error::ParseError { line, value } => {
                write!(f, "parse error on line {line}: {value:?} is not a number")
            }
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Convenient Result type alias for matriz operations.
pub type Result<T> = std::result::Result<T, Error>;
