//! A square grid with per-cell passability.
//!
//! [`Grid`] covers `[0, N)²`. Every cell starts open; individual cells may
//! be blocked (walls). A blocked cell is never entered by a search.

use std::fmt;

use crate::error::{BoundsError, ParseGridError};
use crate::geom::{Bounds, Cell};

/// Character used for open cells in the ASCII form of a grid.
pub const OPEN: char = '.';
/// Character used for blocked cells in the ASCII form of a grid.
pub const WALL: char = '#';

/// An N×N grid of open or blocked cells, stored row-major.
///
/// The flag buffer always holds exactly one entry per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    bounds: Bounds,
    blocked: Vec<bool>,
}

/// Unchecked wire form of [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    bounds: Bounds,
    blocked: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = ParseGridError;

    fn try_from(raw: RawGrid) -> Result<Self, ParseGridError> {
        let expected = raw.bounds.len();
        if raw.blocked.len() != expected {
            return Err(ParseGridError::CellCount {
                expected,
                found: raw.blocked.len(),
            });
        }
        Ok(Self {
            bounds: raw.bounds,
            blocked: raw.blocked,
        })
    }
}

impl Grid {
    /// Create a fully open N×N grid.
    pub fn new(size: u32) -> Result<Self, BoundsError> {
        let bounds = Bounds::new(size)?;
        Ok(Self {
            bounds,
            blocked: vec![false; bounds.len()],
        })
    }

    /// Create an N×N grid with the given cells blocked.
    pub fn with_walls(
        size: u32,
        walls: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, BoundsError> {
        let mut grid = Self::new(size)?;
        for c in walls {
            grid.set_blocked(c, true)?;
        }
        Ok(grid)
    }

    /// Parse a grid from lines of `.` (open) and `#` (blocked).
    ///
    /// The text must describe a square: as many lines as characters per line.
    pub fn from_ascii(text: &str) -> Result<Self, ParseGridError> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let size = lines.len();
        if size == 0 {
            return Err(ParseGridError::Empty);
        }
        if let Some((row, line)) = lines
            .iter()
            .enumerate()
            .find(|(_, l)| l.chars().count() != size)
        {
            return Err(ParseGridError::NotSquare {
                row: row as u32,
                width: line.chars().count(),
                expected: size,
            });
        }

        let mut grid = Self::new(size as u32).map_err(|_| ParseGridError::Empty)?;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row as u32, col as u32);
                match ch {
                    OPEN => {}
                    WALL => {
                        let idx = row * size + col;
                        grid.blocked[idx] = true;
                    }
                    _ => return Err(ParseGridError::InvalidChar { ch, cell }),
                }
            }
        }
        Ok(grid)
    }

    /// The bounds covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Grid dimension `N`.
    #[inline]
    pub fn size(&self) -> u32 {
        self.bounds.size()
    }

    /// Whether the grid contains `c`.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// Whether `c` is blocked. Cells outside the grid count as blocked.
    pub fn is_blocked(&self, c: Cell) -> bool {
        match self.bounds.index(c) {
            Some(i) => self.blocked.get(i).copied().unwrap_or(false),
            None => true,
        }
    }

    /// Whether `c` is inside the grid and open.
    #[inline]
    pub fn is_passable(&self, c: Cell) -> bool {
        !self.is_blocked(c)
    }

    /// Block or unblock a cell.
    pub fn set_blocked(&mut self, c: Cell, blocked: bool) -> Result<(), BoundsError> {
        let c = self.bounds.check(c)?;
        if let Some(slot) = self
            .bounds
            .index(c)
            .and_then(|i| self.blocked.get_mut(i))
        {
            *slot = blocked;
        }
        Ok(())
    }

    /// Reopen every cell.
    pub fn clear_walls(&mut self) {
        self.blocked.fill(false);
    }

    /// Blocked cells in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bounds.iter().filter(|&c| self.is_blocked(c))
    }

    /// Number of blocked cells.
    pub fn wall_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.bounds.iter() {
            if c.col == 0 && c.row > 0 {
                writeln!(f)?;
            }
            let ch = if self.is_blocked(c) { WALL } else { OPEN };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
..#
..#
...";

    #[test]
    fn new_grid_is_open() {
        let g = Grid::new(4).unwrap();
        assert_eq!(g.size(), 4);
        assert_eq!(g.wall_count(), 0);
        assert!(g.bounds().iter().all(|c| g.is_passable(c)));
    }

    #[test]
    fn zero_size_rejected() {
        assert_eq!(Grid::new(0), Err(BoundsError::EmptyGrid));
    }

    #[test]
    fn outside_counts_as_blocked() {
        let g = Grid::new(2).unwrap();
        assert!(g.is_blocked(Cell::new(2, 0)));
        assert!(!g.is_passable(Cell::new(0, 2)));
    }

    #[test]
    fn set_and_clear_walls() {
        let mut g = Grid::new(3).unwrap();
        g.set_blocked(Cell::new(1, 1), true).unwrap();
        assert!(g.is_blocked(Cell::new(1, 1)));
        assert_eq!(g.walls().collect::<Vec<_>>(), vec![Cell::new(1, 1)]);

        g.set_blocked(Cell::new(1, 1), false).unwrap();
        assert!(g.is_passable(Cell::new(1, 1)));

        g.set_blocked(Cell::new(0, 0), true).unwrap();
        g.clear_walls();
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn set_blocked_out_of_bounds_fails() {
        let mut g = Grid::new(3).unwrap();
        let err = g.set_blocked(Cell::new(0, 3), true).unwrap_err();
        assert_eq!(
            err,
            BoundsError::OutOfBounds {
                cell: Cell::new(0, 3),
                size: 3
            }
        );
    }

    #[test]
    fn with_walls() {
        let g = Grid::with_walls(3, [Cell::new(0, 2), Cell::new(1, 2)]).unwrap();
        assert_eq!(g.wall_count(), 2);
        assert!(Grid::with_walls(3, [Cell::new(3, 3)]).is_err());
    }

    #[test]
    fn ascii_round_trip() {
        let g = Grid::from_ascii(MAZE).unwrap();
        assert_eq!(g.size(), 3);
        assert_eq!(
            g.walls().collect::<Vec<_>>(),
            vec![Cell::new(0, 2), Cell::new(1, 2)]
        );
        assert_eq!(g.to_string(), MAZE);
    }

    #[test]
    fn ascii_not_square() {
        let err = Grid::from_ascii("..\n...").unwrap_err();
        assert_eq!(
            err,
            ParseGridError::NotSquare {
                row: 1,
                width: 3,
                expected: 2
            }
        );
    }

    #[test]
    fn ascii_invalid_char() {
        let err = Grid::from_ascii("..\n.x").unwrap_err();
        assert_eq!(
            err,
            ParseGridError::InvalidChar {
                ch: 'x',
                cell: Cell::new(1, 1)
            }
        );
    }

    #[test]
    fn ascii_empty() {
        assert_eq!(Grid::from_ascii(""), Err(ParseGridError::Empty));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_ascii(".#\n..").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert!(back.is_blocked(Cell::new(0, 1)));
    }

    #[test]
    fn short_flag_buffer_rejected() {
        let err = serde_json::from_str::<Grid>(r#"{"bounds":{"size":4},"blocked":[]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("grid has 0 cell flags, expected 16"));
    }

    #[test]
    fn zero_size_rejected() {
        let json = r#"{"bounds":{"size":0},"blocked":[]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }

    #[test]
    fn deserialized_grid_accepts_edits() {
        let json = r#"{"bounds":{"size":2},"blocked":[false,false,false,true]}"#;
        let mut g: Grid = serde_json::from_str(json).unwrap();
        assert_eq!(g.walls().collect::<Vec<_>>(), vec![Cell::new(1, 1)]);
        g.set_blocked(Cell::new(0, 1), true).unwrap();
        assert_eq!(g.to_string(), ".#\n.#");
    }
}
