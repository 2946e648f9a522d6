use std::collections::VecDeque;

use pathviz_core::Cell;

use crate::GridSearch;
use crate::distance::Zero;
use crate::error::SearchError;
use crate::record::{Relax, SearchContext};
use crate::result::SearchResult;
use crate::traits::{Heuristic, Pather};

impl<P: Pather, H: Heuristic> GridSearch<'_, P, H> {
    /// Unguided breadth-first search from `start` to `target`.
    ///
    /// Each step has cost 1 and cells are expanded first-in first-out, so
    /// the path is shortest but nothing steers the search toward the
    /// target. Result shape and endpoint validation match
    /// [`astar`](Self::astar), which makes the two directly comparable.
    pub fn bfs(&self, start: Cell, target: Cell) -> Result<SearchResult, SearchError> {
        self.check_endpoints(start, target)?;
        log::debug!(
            "bfs from {start} to {target} on {} grid",
            self.pather.bounds()
        );

        let mut records = SearchContext::new(&Zero, target);
        records.seed(start);
        let mut queue: VecDeque<Cell> = VecDeque::from([start]);
        let mut exploration_log = Vec::new();
        let mut nbuf = Vec::with_capacity(4);

        while let Some(current) = queue.pop_front() {
            exploration_log.push(current);
            if current == target {
                log::debug!(
                    "bfs reached {target} after {} expansions",
                    exploration_log.len()
                );
                return Ok(SearchResult {
                    exploration_log,
                    path: records.path_to(start, target),
                });
            }

            let depth = records.best_cost(current)? + 1;

            nbuf.clear();
            self.pather.neighbors(current, &mut nbuf);
            for &n in nbuf.iter() {
                if records.relax(n, depth, current) == Relax::Discovered {
                    queue.push_back(n);
                }
            }
        }

        log::debug!(
            "bfs exhausted after {} expansions, {target} unreachable",
            exploration_log.len()
        );
        Ok(SearchResult {
            exploration_log,
            path: None,
        })
    }
}
