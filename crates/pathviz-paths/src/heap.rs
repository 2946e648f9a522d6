//! Indexed binary min-heap with externally computed priorities.
//!
//! [`IndexedHeap`] stores items in an implicit binary tree and keeps a
//! position index (`item -> slot`) so that a single item can be re-sifted
//! after its priority changes. Priorities are never cached: every
//! comparison asks the heap's [`Score`] context afresh.
//!
//! The context is owned by the heap. Whoever mutates the data a score
//! depends on does so through [`IndexedHeap::context_mut`] and must then
//! call [`IndexedHeap::decrease_key`] for the affected item. Only decreases
//! are supported; raising an item's score leaves the heap invariant broken.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::QueueError;

/// Computes the priority of a queued item. Lower priorities pop first.
pub trait Score<T> {
    type Priority: PartialOrd;

    fn score(&self, item: &T) -> Self::Priority;
}

/// A min-priority queue over distinct items with `decrease_key` support.
///
/// Items must be unique: pushing an item equal to one already queued fails
/// with [`QueueError::Duplicate`].
#[derive(Debug)]
pub struct IndexedHeap<T, S> {
    data: Vec<T>,
    positions: HashMap<T, usize>,
    context: S,
}

impl<T, S> IndexedHeap<T, S>
where
    T: Clone + Eq + Hash,
    S: Score<T>,
{
    /// Create an empty heap scored by `context`.
    pub fn new(context: S) -> Self {
        Self {
            data: Vec::new(),
            positions: HashMap::new(),
            context,
        }
    }

    /// Create an empty heap with room for `capacity` items.
    pub fn with_capacity(context: S, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            context,
        }
    }

    /// The scoring context.
    #[inline]
    pub fn context(&self) -> &S {
        &self.context
    }

    /// Mutable access to the scoring context.
    ///
    /// After lowering the score of a queued item, call
    /// [`decrease_key`](Self::decrease_key) for it.
    #[inline]
    pub fn context_mut(&mut self) -> &mut S {
        &mut self.context
    }

    /// Consume the heap, returning its scoring context.
    pub fn into_context(self) -> S {
        self.context
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `item` is currently queued.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// The minimum-priority item, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Insert an item and restore the heap order upward.
    pub fn push(&mut self, item: T) -> Result<(), QueueError> {
        if self.positions.contains_key(&item) {
            return Err(QueueError::Duplicate);
        }
        let i = self.data.len();
        self.positions.insert(item.clone(), i);
        self.data.push(item);
        self.sift_up(i);
        Ok(())
    }

    /// Remove and return the minimum-priority item, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let top = self.data.swap_remove(0);
        self.positions.remove(&top);
        if let Some(moved) = self.data.first() {
            if let Some(slot) = self.positions.get_mut(moved) {
                *slot = 0;
            }
            self.sift_down(0);
        }
        Some(top)
    }

    /// Like [`pop`](Self::pop), but an empty heap is an error.
    pub fn remove_min(&mut self) -> Result<T, QueueError> {
        self.pop().ok_or(QueueError::Empty)
    }

    /// Re-sift `item` upward after its score has been lowered.
    pub fn decrease_key(&mut self, item: &T) -> Result<(), QueueError> {
        let i = *self.positions.get(item).ok_or(QueueError::NotPresent)?;
        self.sift_up(i);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Whether the item in slot `a` scores strictly lower than slot `b`.
    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.context.score(&self.data[a]) < self.context.score(&self.data[b])
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        if let Some(slot) = self.positions.get_mut(&self.data[a]) {
            *slot = a;
        }
        if let Some(slot) = self.positions.get_mut(&self.data[b]) {
            *slot = b;
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let right = left + 1;

            // Only a strictly smaller child moves up; on a tie between two
            // qualifying children the right one is taken.
            let go_left = self.less(left, i);
            let go_right = right < n && self.less(right, i);
            let child = match (go_left, go_right) {
                (true, true) => {
                    if self.less(left, right) {
                        left
                    } else {
                        right
                    }
                }
                (true, false) => left,
                (false, true) => right,
                (false, false) => break,
            };

            self.swap(i, child);
            i = child;
        }
    }

    /// Check the heap order and the position index.
    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let ordered = (1..self.data.len()).all(|i| !self.less(i, (i - 1) / 2));
        let indexed = self.positions.len() == self.data.len()
            && self
                .data
                .iter()
                .enumerate()
                .all(|(i, item)| self.positions.get(item) == Some(&i));
        ordered && indexed
    }
}
