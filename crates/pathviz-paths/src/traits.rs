use pathviz_core::{Bounds, Cell, Grid};

/// Minimal search interface: grid bounds and passability.
pub trait Pather {
    /// The cells a search may visit.
    fn bounds(&self) -> Bounds;

    /// Whether `c` may be entered. Only called for cells inside
    /// [`bounds`](Self::bounds).
    fn passable(&self, c: Cell) -> bool;

    /// Append the passable 4-directional neighbours of `c` into `buf`, in
    /// the order down, up, right, left. The caller clears `buf` first.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        let bounds = self.bounds();
        buf.extend(
            c.neighbors_4()
                .into_iter()
                .flatten()
                .filter(|&n| bounds.contains(n) && self.passable(n)),
        );
    }
}

/// Estimate of the remaining cost from a cell to the target.
///
/// Must never overestimate the true number of unit steps (admissible) for
/// searches to return shortest paths. Closures `Fn(Cell, Cell) -> f64`
/// implement this trait.
pub trait Heuristic {
    fn estimate(&self, from: Cell, to: Cell) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Cell, Cell) -> f64,
{
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        self(from, to)
    }
}

impl Pather for Grid {
    fn bounds(&self) -> Bounds {
        Grid::bounds(self)
    }

    fn passable(&self, c: Cell) -> bool {
        self.is_passable(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_neighbors_respect_bounds_and_walls() {
        let grid = Grid::from_ascii("...\n.#.\n...").unwrap();
        let mut buf = Vec::new();

        grid.neighbors(Cell::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Cell::new(1, 0), Cell::new(0, 1)]);

        buf.clear();
        grid.neighbors(Cell::new(0, 1), &mut buf);
        assert_eq!(buf, vec![Cell::new(0, 2), Cell::new(0, 0)]);

        buf.clear();
        grid.neighbors(Cell::new(2, 2), &mut buf);
        assert_eq!(buf, vec![Cell::new(1, 2), Cell::new(2, 1)]);
    }

    #[test]
    fn closure_is_a_heuristic() {
        let h = |a: Cell, b: Cell| f64::from(a.row.abs_diff(b.row));
        assert_eq!(h.estimate(Cell::new(0, 0), Cell::new(3, 9)), 3.0);
    }
}
