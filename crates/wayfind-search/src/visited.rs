//! Settled-vertex tracking.
//!
//! A [`VisitedMap`] records, for every settled vertex, the predecessor that
//! first reached it. Implementations trade lookup cost against reset cost
//! and memory:
//!
//! - [`OrderedVisited`]: `BTreeMap`, memory proportional to settled vertices.
//! - [`HashVisited`]: `HashMap`, same footprint, O(1) expected lookup.
//! - [`DenseVisited`]: one slot per vertex, `vertex_count` marks "unvisited".
//!   Reset rewrites every slot.
//! - [`StampedVisited`]: one slot per vertex tagged with a generation; reset
//!   bumps the generation instead of rewriting slots.

use std::collections::{BTreeMap, HashMap};

use wayfind_graph::VertexId;

/// Mapping from settled vertex to its predecessor.
pub trait VisitedMap {
    /// An empty map with room for `vertex_count` vertices.
    fn with_capacity(vertex_count: usize) -> Self
    where
        Self: Sized;

    /// Forget every entry and prepare for a graph of `vertex_count` vertices.
    fn reset(&mut self, vertex_count: usize);

    fn contains(&self, id: VertexId) -> bool;

    /// Record `pred` as the predecessor of `id`. `id` must not be present.
    fn insert(&mut self, id: VertexId, pred: VertexId);

    fn get(&self, id: VertexId) -> Option<VertexId>;

    /// Number of settled vertices.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Associative
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct OrderedVisited {
    preds: BTreeMap<VertexId, VertexId>,
}

impl VisitedMap for OrderedVisited {
    fn with_capacity(_vertex_count: usize) -> Self {
        Self::default()
    }

    fn reset(&mut self, _vertex_count: usize) {
        self.preds.clear();
    }

    #[inline]
    fn contains(&self, id: VertexId) -> bool {
        self.preds.contains_key(&id)
    }

    #[inline]
    fn insert(&mut self, id: VertexId, pred: VertexId) {
        let previous = self.preds.insert(id, pred);
        debug_assert!(previous.is_none(), "vertex {id} settled twice");
    }

    #[inline]
    fn get(&self, id: VertexId) -> Option<VertexId> {
        self.preds.get(&id).copied()
    }

    fn len(&self) -> usize {
        self.preds.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct HashVisited {
    preds: HashMap<VertexId, VertexId>,
}

impl VisitedMap for HashVisited {
    fn with_capacity(vertex_count: usize) -> Self {
        Self {
            preds: HashMap::with_capacity(vertex_count),
        }
    }

    fn reset(&mut self, _vertex_count: usize) {
        // HashMap::clear keeps the table allocation.
        self.preds.clear();
    }

    #[inline]
    fn contains(&self, id: VertexId) -> bool {
        self.preds.contains_key(&id)
    }

    #[inline]
    fn insert(&mut self, id: VertexId, pred: VertexId) {
        let previous = self.preds.insert(id, pred);
        debug_assert!(previous.is_none(), "vertex {id} settled twice");
    }

    #[inline]
    fn get(&self, id: VertexId) -> Option<VertexId> {
        self.preds.get(&id).copied()
    }

    fn len(&self) -> usize {
        self.preds.len()
    }
}

// ---------------------------------------------------------------------------
// Dense
// ---------------------------------------------------------------------------

/// Predecessor vector indexed by vertex id.
#[derive(Debug, Clone, Default)]
pub struct DenseVisited {
    preds: Vec<VertexId>,
    settled: usize,
}

impl DenseVisited {
    /// The "unvisited" marker: the vertex count itself.
    #[inline]
    fn unvisited(&self) -> VertexId {
        self.preds.len() as VertexId
    }
}

impl VisitedMap for DenseVisited {
    fn with_capacity(vertex_count: usize) -> Self {
        Self {
            preds: Vec::with_capacity(vertex_count),
            settled: 0,
        }
    }

    fn reset(&mut self, vertex_count: usize) {
        self.preds.clear();
        self.preds.resize(vertex_count, vertex_count as VertexId);
        self.settled = 0;
    }

    #[inline]
    fn contains(&self, id: VertexId) -> bool {
        self.preds
            .get(id as usize)
            .is_some_and(|&p| p != self.unvisited())
    }

    #[inline]
    fn insert(&mut self, id: VertexId, pred: VertexId) {
        debug_assert!(!self.contains(id), "vertex {id} settled twice");
        self.preds[id as usize] = pred;
        self.settled += 1;
    }

    #[inline]
    fn get(&self, id: VertexId) -> Option<VertexId> {
        self.preds
            .get(id as usize)
            .copied()
            .filter(|&p| p != self.unvisited())
    }

    fn len(&self) -> usize {
        self.settled
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    pred: VertexId,
    generation: u32,
}

/// Predecessor vector whose entries are valid only for the current
/// generation. Resetting a same-sized map is O(1).
#[derive(Debug, Clone, Default)]
pub struct StampedVisited {
    slots: Vec<Slot>,
    generation: u32,
    settled: usize,
}

impl VisitedMap for StampedVisited {
    fn with_capacity(vertex_count: usize) -> Self {
        Self {
            slots: Vec::with_capacity(vertex_count),
            generation: 0,
            settled: 0,
        }
    }

    fn reset(&mut self, vertex_count: usize) {
        self.settled = 0;
        if self.slots.len() != vertex_count {
            self.slots.clear();
            self.slots.resize(vertex_count, Slot::default());
            self.generation = 1;
            return;
        }
        // Bump generation to lazily invalidate all slots.
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: slots stamped long ago would look current again.
            self.slots.fill(Slot::default());
            self.generation = 1;
        }
    }

    #[inline]
    fn contains(&self, id: VertexId) -> bool {
        self.slots
            .get(id as usize)
            .is_some_and(|s| s.generation == self.generation)
    }

    #[inline]
    fn insert(&mut self, id: VertexId, pred: VertexId) {
        debug_assert!(!self.contains(id), "vertex {id} settled twice");
        self.slots[id as usize] = Slot {
            pred,
            generation: self.generation,
        };
        self.settled += 1;
    }

    #[inline]
    fn get(&self, id: VertexId) -> Option<VertexId> {
        self.slots
            .get(id as usize)
            .filter(|s| s.generation == self.generation)
            .map(|s| s.pred)
    }

    fn len(&self) -> usize {
        self.settled
    }
}
