use std::fmt;

use crate::geom::Cell;

/// Errors raised when a cell or grid size is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// A grid must have a dimension of at least 1.
    EmptyGrid,
    /// The cell lies outside `[0, size)²`.
    OutOfBounds { cell: Cell, size: u32 },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid dimension must be positive"),
            Self::OutOfBounds { cell, size } => {
                write!(f, "cell {cell} is outside the {size}x{size} grid")
            }
        }
    }
}

impl std::error::Error for BoundsError {}

/// Errors that can occur when parsing a grid from its ASCII form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// The text contains no lines.
    Empty,
    /// A line's width differs from the number of lines.
    NotSquare {
        row: u32,
        width: usize,
        expected: usize,
    },
    /// A character other than `.` or `#` was found.
    InvalidChar { ch: char, cell: Cell },
    /// The per-cell flags do not cover the grid exactly.
    CellCount { expected: usize, found: usize },
}

impl fmt::Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid text is empty"),
            Self::NotSquare {
                row,
                width,
                expected,
            } => write!(
                f,
                "grid line {row} is {width} cells wide, expected {expected}"
            ),
            Self::InvalidChar { ch, cell } => {
                write!(f, "grid contains invalid character '{ch}' at {cell}")
            }
            Self::CellCount { expected, found } => {
                write!(f, "grid has {found} cell flags, expected {expected}")
            }
        }
    }
}

impl std::error::Error for ParseGridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_cell_and_size() {
        let err = BoundsError::OutOfBounds {
            cell: Cell::new(5, 1),
            size: 4,
        };
        assert_eq!(err.to_string(), "cell (5, 1) is outside the 4x4 grid");
        assert_eq!(
            BoundsError::EmptyGrid.to_string(),
            "grid dimension must be positive"
        );
    }

    #[test]
    fn parse_errors_display() {
        let err = ParseGridError::InvalidChar {
            ch: 'x',
            cell: Cell::new(1, 1),
        };
        assert_eq!(
            err.to_string(),
            "grid contains invalid character 'x' at (1, 1)"
        );
        assert_eq!(
            ParseGridError::CellCount {
                expected: 9,
                found: 4
            }
            .to_string(),
            "grid has 4 cell flags, expected 9"
        );
    }
}
