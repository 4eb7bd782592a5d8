use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use wayfind_graph::{EdgeWeight, VertexId};

/// A frontier entry: reach `succ` from `pred` with accumulated `weight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub pred: VertexId,
    pub succ: VertexId,
    pub weight: EdgeWeight,
}

impl Transition {
    #[inline]
    pub const fn new(pred: VertexId, succ: VertexId, weight: EdgeWeight) -> Self {
        Self { pred, succ, weight }
    }
}

impl Ord for Transition {
    // Weight first; equal weights fall back to the lower candidate id, then
    // the lower predecessor, so every strategy breaks ties the same way.
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.succ.cmp(&other.succ))
            .then(self.pred.cmp(&other.pred))
    }
}

impl PartialOrd for Transition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue that keeps its allocation across [`clear`](Self::clear).
///
/// No decrease-key: superseded entries stay queued and are dropped by the
/// caller when they surface.
#[derive(Debug, Clone)]
pub struct Frontier<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Frontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    /// Remove and return the smallest entry.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Drop every entry, keeping the buffer.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
