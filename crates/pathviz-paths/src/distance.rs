use pathviz_core::Cell;

use crate::traits::Heuristic;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dr = f64::from(a.row.abs_diff(b.row));
    let dc = f64::from(a.col.abs_diff(b.col));
    (dr * dr + dc * dc).sqrt()
}

/// Straight-line distance to the target. Never exceeds the 4-directional
/// step count, so it is admissible on unit-cost grids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        euclidean(from, to)
    }
}

/// Exact step count on an open 4-directional grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        f64::from(manhattan(from, to))
    }
}

/// No guidance: turns best-first search into Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Cell, _to: Cell) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(euclidean(b, b), 0.0);
    }

    #[test]
    fn heuristics_are_admissible_on_open_grid() {
        let target = Cell::new(2, 3);
        for row in 0..6 {
            for col in 0..6 {
                let c = Cell::new(row, col);
                let steps = f64::from(manhattan(c, target));
                assert!(Euclidean.estimate(c, target) <= steps);
                assert_eq!(Manhattan.estimate(c, target), steps);
                assert_eq!(Zero.estimate(c, target), 0.0);
            }
        }
    }
}
