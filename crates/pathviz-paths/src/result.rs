use pathviz_core::Cell;

/// Everything a search produced: the cells it expanded, in order, and the
/// shortest path if the target was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells in the order they were taken off the frontier. Starts with the
    /// start cell; ends with the target when one was found.
    pub exploration_log: Vec<Cell>,
    /// Start-to-target path, both ends inclusive. `None` when the target is
    /// unreachable.
    pub path: Option<Vec<Cell>>,
}

/// One step of a replay, in the order a front-end draws them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Explored(Cell),
    Path(Cell),
}

impl SearchResult {
    /// Whether the target was reached.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// The path as a slice, if found.
    #[inline]
    pub fn path(&self) -> Option<&[Cell]> {
        self.path.as_deref()
    }

    /// Number of cells on the path, both ends included.
    #[inline]
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }

    /// Number of steps along the path (cells minus one).
    pub fn cost(&self) -> Option<usize> {
        self.path_len().map(|n| n.saturating_sub(1))
    }

    /// Number of expanded cells.
    #[inline]
    pub fn explored(&self) -> usize {
        self.exploration_log.len()
    }

    /// Replay order: every explored cell except the start, then every path
    /// cell. Consumers that animate can stop pulling frames at any point.
    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        let explored = self
            .exploration_log
            .iter()
            .skip(1)
            .map(|&c| Frame::Explored(c));
        let path = self
            .path
            .iter()
            .flatten()
            .map(|&c| Frame::Path(c));
        explored.chain(path)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn result_round_trip() {
        let r = SearchResult {
            exploration_log: vec![Cell::new(1, 1)],
            path: Some(vec![Cell::new(1, 1)]),
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
