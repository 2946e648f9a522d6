//! Shortest-path search on square grids, built for visualisation.
//!
//! The crate has two layers:
//!
//! - [`IndexedHeap`], a binary min-heap whose priorities are computed on
//!   demand by a [`Score`] context and which supports
//!   [`decrease_key`](IndexedHeap::decrease_key) through a position index.
//! - [`GridSearch`], which drives that heap to run a best-first (A\*) search
//!   with unit step costs and 4-directional moves, returning both the order
//!   in which cells were expanded and the reconstructed shortest path.
//!
//! A breadth-first baseline ([`GridSearch::bfs`]) produces the same
//! [`SearchResult`] shape, so guided and unguided searches can be compared
//! cell for cell.
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`Pather`] | grid bounds, passability, neighbour order |
//! | [`Heuristic`] | admissible estimate toward the target |
//! | [`Score`] | priority of a queued item |

mod astar;
mod bfs;
mod distance;
mod error;
mod heap;
mod record;
mod result;
mod search;
mod traits;

pub use distance::{Euclidean, Manhattan, Zero, euclidean, manhattan};
pub use error::{QueueError, SearchError};
pub use heap::{IndexedHeap, Score};
pub use record::{Relax, SearchContext, SearchRecord};
pub use result::{Frame, SearchResult};
pub use search::GridSearch;
pub use traits::{Heuristic, Pather};

use pathviz_core::{Cell, Grid};

/// Run A* with the [`Euclidean`] heuristic on a fresh, fully open N×N grid.
pub fn search(size: u32, start: Cell, target: Cell) -> Result<SearchResult, SearchError> {
    let grid = Grid::new(size)?;
    GridSearch::new(&grid).astar(start, target)
}
