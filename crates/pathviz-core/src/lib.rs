//! **pathviz-core** — geometry and grid types for shortest-path visualisation.
//!
//! This crate provides the value types shared by the search engine and any
//! front-end that drives it: grid cells and their packed keys, square grid
//! bounds, and a grid with per-cell passability.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::{BoundsError, ParseGridError};
pub use geom::{Bounds, BoundsIter, Cell, CellKey};
pub use grid::Grid;
