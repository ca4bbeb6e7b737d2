//! Shape validation error for matrix construction.

use core::fmt;

/// The input could not form a rectangular, non-empty grid.
///
/// Every constructor checks its input eagerly and returns this instead of
/// producing a matrix that later operations would index out of bounds.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeError {
    /// The grid has no rows.
    NoRows,
    /// The grid has rows, but they hold no samples.
    NoColumns,
    /// A row's length differs from the first row's.
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A flat buffer's length does not equal `rows * cols`.
    LengthMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },
    /// `rows * cols` overflows `usize`, or the samples cannot be allocated.
    TooLarge,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRows => write!(f, "grid has no rows"),
            Self::NoColumns => write!(f, "grid has no columns"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has length {found}, expected {expected}"
            ),
            Self::LengthMismatch { expected, found } => {
                write!(f, "buffer has length {found}, expected {expected}")
            }
            Self::TooLarge => write!(f, "grid is too large to allocate"),
        }
    }
}

impl core::error::Error for ShapeError {}
