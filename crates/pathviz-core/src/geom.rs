//! Geometry primitives: [`Cell`], [`CellKey`] and [`Bounds`].
//!
//! Cells use matrix coordinates: `row` grows down, `col` grows right, and
//! both are non-negative. A grid of dimension `N` covers `[0, N)²`.

use std::fmt;

use crate::error::BoundsError;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid cell addressed by `(row, col)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Packed value key for this cell.
    #[inline]
    pub const fn key(self) -> CellKey {
        CellKey(((self.row as u64) << 32) | self.col as u64)
    }

    /// Return the cell shifted by `(dr, dc)`, or `None` if either
    /// coordinate would become negative or overflow.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// The four axis-aligned neighbours in search order:
    /// down, up, right, left. Neighbours that would leave the
    /// non-negative quadrant are `None`.
    #[inline]
    pub fn neighbors_4(self) -> [Option<Cell>; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(0, -1),
        ]
    }

    /// Whether `other` is exactly one axis-aligned step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Cell {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// CellKey
// ---------------------------------------------------------------------------

/// A [`Cell`] packed into a single `u64`: the row in the high 32 bits and
/// the column in the low 32 bits.
///
/// Two keys are equal iff the cells they were built from are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellKey(u64);

impl CellKey {
    /// Decode back into the cell this key was built from.
    #[inline]
    pub const fn cell(self) -> Cell {
        Cell {
            row: (self.0 >> 32) as u32,
            col: self.0 as u32,
        }
    }

    /// Raw packed value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<Cell> for CellKey {
    fn from(c: Cell) -> Self {
        c.key()
    }
}

impl From<CellKey> for Cell {
    fn from(k: CellKey) -> Self {
        k.cell()
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cell().fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The square `[0, size)²` covered by a grid of dimension `size`.
///
/// Always non-empty: the only constructors are [`Bounds::new`] and, with the
/// `serde` feature, deserialization, which goes through the same check.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBounds"))]
pub struct Bounds {
    size: u32,
}

impl Bounds {
    /// Bounds of an N×N grid. Fails for `size == 0`.
    pub fn new(size: u32) -> Result<Self, BoundsError> {
        if size == 0 {
            return Err(BoundsError::EmptyGrid);
        }
        Ok(Self { size })
    }

    /// Grid dimension `N`.
    #[inline]
    pub fn size(self) -> u32 {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Whether the bounds cover no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.size == 0
    }

    /// Whether `c` lies inside the bounds.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.row < self.size && c.col < self.size
    }

    /// Return `c` unchanged if it lies inside the bounds, otherwise a
    /// [`BoundsError::OutOfBounds`].
    pub fn check(self, c: Cell) -> Result<Cell, BoundsError> {
        if self.contains(c) {
            Ok(c)
        } else {
            Err(BoundsError::OutOfBounds {
                cell: c,
                size: self.size,
            })
        }
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.size as usize + c.col as usize)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Cell::ORIGIN,
        }
    }
}

/// Unchecked wire form of [`Bounds`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBounds {
    size: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBounds> for Bounds {
    type Error = BoundsError;

    fn try_from(raw: RawBounds) -> Result<Self, BoundsError> {
        Self::new(raw.size)
    }
}

impl IntoIterator for Bounds {
    type Item = Cell;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.size, self.size)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells in [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Cell,
}

impl Iterator for BoundsIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.cur.row >= self.bounds.size || self.bounds.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.size {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.size {
            return (0, Some(0));
        }
        let n = self.bounds.size as usize;
        let remaining_in_row = n - self.cur.col as usize;
        let remaining_rows = n - self.cur.row as usize - 1;
        let total = remaining_in_row + remaining_rows * n;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}
