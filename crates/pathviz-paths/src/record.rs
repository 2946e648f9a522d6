//! Per-cell search bookkeeping and the frontier's scoring context.

use std::collections::HashMap;

use pathviz_core::{Cell, CellKey};

use crate::error::SearchError;
use crate::heap::Score;
use crate::traits::Heuristic;

/// Best known way to reach a discovered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRecord {
    /// Number of steps on the best known path from the start.
    pub best_cost: u32,
    /// The cell that path arrives from. The start is its own predecessor.
    pub predecessor: Cell,
}

/// Outcome of offering a cell a new candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relax {
    /// First time the cell was seen; a record was created.
    Discovered,
    /// The candidate was strictly cheaper; the record was updated in place.
    Improved,
    /// The candidate was no cheaper; nothing changed.
    Unchanged,
}

/// Records for every discovered cell plus the heuristic pinned to one
/// search's target.
///
/// Scores a [`CellKey`] as `best_cost + heuristic(cell, target)`. A fresh
/// context is built for each search, so a later search with another target
/// can never leak into this one.
#[derive(Debug)]
pub struct SearchContext<'h, H> {
    records: HashMap<CellKey, SearchRecord>,
    heuristic: &'h H,
    target: Cell,
}

impl<'h, H: Heuristic> SearchContext<'h, H> {
    /// Empty context scoring toward `target`.
    pub fn new(heuristic: &'h H, target: Cell) -> Self {
        Self {
            records: HashMap::new(),
            heuristic,
            target,
        }
    }

    /// The target every estimate is measured against.
    #[inline]
    pub fn target(&self) -> Cell {
        self.target
    }

    /// Record of a discovered cell.
    #[inline]
    pub fn record(&self, c: Cell) -> Option<&SearchRecord> {
        self.records.get(&c.key())
    }

    /// Best known cost of `c`. Every cell handed to the frontier has a
    /// record, so a miss is reported as [`SearchError::Unrecorded`].
    pub fn best_cost(&self, c: Cell) -> Result<u32, SearchError> {
        self.record(c)
            .map(|rec| rec.best_cost)
            .ok_or(SearchError::Unrecorded(c))
    }

    /// Number of discovered cells.
    #[inline]
    pub fn discovered(&self) -> usize {
        self.records.len()
    }

    /// Register the start cell at cost 0, as its own predecessor.
    pub fn seed(&mut self, start: Cell) {
        self.records.insert(
            start.key(),
            SearchRecord {
                best_cost: 0,
                predecessor: start,
            },
        );
    }

    /// Offer `c` a path of `cost` steps arriving from `from`.
    ///
    /// Equal-cost alternatives are rejected, so the first predecessor found
    /// for a given cost is kept.
    pub fn relax(&mut self, c: Cell, cost: u32, from: Cell) -> Relax {
        let candidate = SearchRecord {
            best_cost: cost,
            predecessor: from,
        };
        match self.records.get_mut(&c.key()) {
            None => {
                self.records.insert(c.key(), candidate);
                Relax::Discovered
            }
            Some(rec) if cost < rec.best_cost => {
                *rec = candidate;
                Relax::Improved
            }
            Some(_) => Relax::Unchanged,
        }
    }

    /// Walk predecessor links from `target` back to `start`.
    ///
    /// Returns the cells in start-to-target order, or `None` if `target` was
    /// never discovered.
    pub fn path_to(&self, start: Cell, target: Cell) -> Option<Vec<Cell>> {
        let mut path = Vec::new();
        let mut cur = target;
        while cur != start {
            let rec = self.record(cur)?;
            path.push(cur);
            cur = rec.predecessor;
        }
        path.push(start);
        path.reverse();
        Some(path)
    }
}

impl<H: Heuristic> Score<CellKey> for SearchContext<'_, H> {
    type Priority = f64;

    fn score(&self, key: &CellKey) -> f64 {
        match self.records.get(key) {
            Some(rec) => f64::from(rec.best_cost) + self.heuristic.estimate(key.cell(), self.target),
            None => f64::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{Euclidean, Zero};

    #[test]
    fn relax_discovers_then_improves_strictly() {
        let mut ctx = SearchContext::new(&Zero, Cell::new(3, 3));
        let c = Cell::new(1, 1);
        assert_eq!(ctx.relax(c, 5, Cell::new(0, 1)), Relax::Discovered);
        assert_eq!(ctx.relax(c, 5, Cell::new(1, 0)), Relax::Unchanged);
        assert_eq!(ctx.record(c).unwrap().predecessor, Cell::new(0, 1));
        assert_eq!(ctx.relax(c, 6, Cell::new(1, 0)), Relax::Unchanged);
        assert_eq!(ctx.relax(c, 2, Cell::new(1, 0)), Relax::Improved);
        assert_eq!(
            ctx.record(c),
            Some(&SearchRecord {
                best_cost: 2,
                predecessor: Cell::new(1, 0)
            })
        );
        assert_eq!(ctx.discovered(), 1);
        assert_eq!(ctx.best_cost(c), Ok(2));
    }

    #[test]
    fn best_cost_of_undiscovered_cell_fails() {
        let mut ctx = SearchContext::new(&Zero, Cell::new(2, 2));
        ctx.seed(Cell::ORIGIN);
        assert_eq!(ctx.best_cost(Cell::ORIGIN), Ok(0));
        assert_eq!(
            ctx.best_cost(Cell::new(1, 1)),
            Err(SearchError::Unrecorded(Cell::new(1, 1)))
        );
    }

    #[test]
    fn score_is_cost_plus_estimate() {
        let target = Cell::new(3, 4);
        let mut ctx = SearchContext::new(&Euclidean, target);
        ctx.seed(Cell::ORIGIN);
        assert_eq!(ctx.score(&Cell::ORIGIN.key()), 5.0);

        ctx.relax(Cell::new(3, 0), 3, Cell::new(2, 0));
        assert_eq!(ctx.score(&Cell::new(3, 0).key()), 7.0);
        assert_eq!(ctx.score(&Cell::new(9, 9).key()), f64::INFINITY);
        assert_eq!(ctx.target(), target);
    }

    #[test]
    fn path_follows_predecessors() {
        let start = Cell::new(0, 0);
        let mut ctx = SearchContext::new(&Zero, Cell::new(0, 2));
        ctx.seed(start);
        ctx.relax(Cell::new(0, 1), 1, start);
        ctx.relax(Cell::new(0, 2), 2, Cell::new(0, 1));
        assert_eq!(
            ctx.path_to(start, Cell::new(0, 2)),
            Some(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)])
        );
        assert_eq!(ctx.path_to(start, start), Some(vec![start]));
        assert_eq!(ctx.path_to(start, Cell::new(5, 5)), None);
    }
}
