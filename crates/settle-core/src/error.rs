//! Error types for grid construction and source seeding.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or source placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero dimension.
    EmptyGrid,
    /// A dimension exceeds the maximum addressable size.
    DimensionTooLarge {
        /// Which dimension overflowed (`"rows"` or `"cols"`).
        name: &'static str,
        /// The offending value.
        value: usize,
        /// The maximum allowed value.
        max: u32,
    },
    /// Row-of-rows input had rows of unequal length.
    RaggedRows {
        /// Index of the first mismatched row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the mismatched row.
        got: usize,
    },
    /// A source coordinate falls outside the grid.
    SourceOutOfBounds {
        /// Row of the offending source.
        row: u32,
        /// Column of the offending source.
        col: u32,
        /// Grid height.
        rows: u32,
        /// Grid width.
        cols: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum dimension {max}")
            }
            Self::RaggedRows { row, expected, got } => {
                write!(f, "row {row} has {got} cells, expected {expected}")
            }
            Self::SourceOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "source ({row}, {col}) outside grid bounds [0, {rows}) x [0, {cols})"
                )
            }
        }
    }
}

impl Error for GridError {}
