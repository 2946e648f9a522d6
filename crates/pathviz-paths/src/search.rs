use pathviz_core::Cell;

use crate::distance::Euclidean;
use crate::error::SearchError;
use crate::traits::{Heuristic, Pather};

/// Entry point for searches over one grid.
///
/// `GridSearch` borrows the grid (any [`Pather`]) and owns the heuristic.
/// It keeps no state between searches: each call builds its own records and
/// frontier and drops them on return.
#[derive(Debug, Clone)]
pub struct GridSearch<'a, P, H = Euclidean> {
    pub(crate) pather: &'a P,
    pub(crate) heuristic: H,
}

impl<'a, P: Pather> GridSearch<'a, P> {
    /// Search `pather` with the [`Euclidean`] heuristic.
    pub fn new(pather: &'a P) -> Self {
        Self {
            pather,
            heuristic: Euclidean,
        }
    }
}

impl<'a, P: Pather, H: Heuristic> GridSearch<'a, P, H> {
    /// Search `pather` with a custom heuristic.
    pub fn with_heuristic(pather: &'a P, heuristic: H) -> Self {
        Self { pather, heuristic }
    }

    /// The grid being searched.
    #[inline]
    pub fn pather(&self) -> &'a P {
        self.pather
    }

    /// The heuristic used by [`astar`](Self::astar).
    #[inline]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Fail fast on endpoints outside the grid or on blocked cells.
    pub(crate) fn check_endpoints(&self, start: Cell, target: Cell) -> Result<(), SearchError> {
        let bounds = self.pather.bounds();
        for c in [start, target] {
            bounds.check(c)?;
            if !self.pather.passable(c) {
                return Err(SearchError::Blocked(c));
            }
        }
        Ok(())
    }
}
