use pathviz_core::Cell;

use crate::GridSearch;
use crate::error::SearchError;
use crate::heap::IndexedHeap;
use crate::record::{Relax, SearchContext};
use crate::result::SearchResult;
use crate::traits::{Heuristic, Pather};

impl<P: Pather, H: Heuristic> GridSearch<'_, P, H> {
    /// Best-first (A*) search from `start` to `target` with unit step costs.
    ///
    /// Cells leave the frontier in order of `steps so far + estimate`. The
    /// returned log lists them in that order; the path is rebuilt from
    /// predecessor links once the target leaves the frontier. If the
    /// frontier empties first the path is `None`.
    pub fn astar(&self, start: Cell, target: Cell) -> Result<SearchResult, SearchError> {
        self.check_endpoints(start, target)?;
        log::debug!(
            "a* search from {start} to {target} on {} grid",
            self.pather.bounds()
        );

        let mut context = SearchContext::new(&self.heuristic, target);
        context.seed(start);
        let mut frontier = IndexedHeap::new(context);
        frontier.push(start.key())?;

        let mut exploration_log = Vec::new();
        let mut nbuf = Vec::with_capacity(4);

        while let Some(key) = frontier.pop() {
            let current = key.cell();
            log::trace!("expanding {current}");
            exploration_log.push(current);

            if current == target {
                let path = frontier.context().path_to(start, target);
                log::debug!(
                    "a* reached {target} after {} expansions",
                    exploration_log.len()
                );
                return Ok(SearchResult {
                    exploration_log,
                    path,
                });
            }

            let cost = frontier.context().best_cost(current)? + 1;

            nbuf.clear();
            self.pather.neighbors(current, &mut nbuf);

            for &n in nbuf.iter() {
                let nk = n.key();
                match frontier.context_mut().relax(n, cost, current) {
                    Relax::Discovered => frontier.push(nk)?,
                    Relax::Improved if frontier.contains(&nk) => {
                        log::trace!("cheaper path to {n} via {current}");
                        frontier.decrease_key(&nk)?;
                    }
                    Relax::Improved => {
                        // Already expanded; only an inconsistent heuristic
                        // gets here.
                        log::trace!("reopening {n} via {current}");
                        frontier.push(nk)?;
                    }
                    Relax::Unchanged => {}
                }
            }
        }

        log::debug!(
            "a* frontier exhausted after {} expansions, {target} unreachable",
            exploration_log.len()
        );
        Ok(SearchResult {
            exploration_log,
            path: None,
        })
    }
}
