use std::fmt;

use pathviz_core::{BoundsError, Cell};

/// Precondition violations on an [`IndexedHeap`](crate::IndexedHeap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `remove_min` on an empty heap.
    Empty,
    /// The item is already queued; use `decrease_key` instead.
    Duplicate,
    /// `decrease_key` on an item that is not queued.
    NotPresent,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "remove_min called on an empty queue"),
            Self::Duplicate => write!(f, "item is already queued"),
            Self::NotPresent => write!(f, "decrease_key called on an item that is not queued"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Errors returned by the grid searches.
///
/// An unreachable target is not an error: it is reported through
/// [`SearchResult::path`](crate::SearchResult::path) being `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start or target lies outside the grid, or the grid is empty.
    Bounds(BoundsError),
    /// The start or target is a blocked cell.
    Blocked(Cell),
    /// The frontier queue rejected an operation.
    Queue(QueueError),
    /// A cell left the frontier without a search record.
    Unrecorded(Cell),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounds(e) => write!(f, "search endpoint invalid: {e}"),
            Self::Blocked(c) => write!(f, "search endpoint {c} is blocked"),
            Self::Queue(e) => write!(f, "frontier error: {e}"),
            Self::Unrecorded(c) => write!(f, "expanded cell {c} has no search record"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bounds(e) => Some(e),
            Self::Queue(e) => Some(e),
            Self::Blocked(_) | Self::Unrecorded(_) => None,
        }
    }
}

impl From<BoundsError> for SearchError {
    fn from(e: BoundsError) -> Self {
        Self::Bounds(e)
    }
}

impl From<QueueError> for SearchError {
    fn from(e: QueueError) -> Self {
        Self::Queue(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display() {
        assert_eq!(
            SearchError::Blocked(Cell::new(1, 2)).to_string(),
            "search endpoint (1, 2) is blocked"
        );
        assert_eq!(
            SearchError::from(QueueError::NotPresent).to_string(),
            "frontier error: decrease_key called on an item that is not queued"
        );
        assert_eq!(
            SearchError::Unrecorded(Cell::new(0, 3)).to_string(),
            "expanded cell (0, 3) has no search record"
        );
    }

    #[test]
    fn source_chain() {
        let err = SearchError::from(BoundsError::EmptyGrid);
        assert!(err.source().is_some());
        assert!(SearchError::Blocked(Cell::ORIGIN).source().is_none());
        assert!(SearchError::Unrecorded(Cell::ORIGIN).source().is_none());
    }
}
