//! When a search may stop.

use wayfind_graph::VertexId;

use crate::error::{SearchError, check_endpoint};

/// Decides whether settling a vertex ends the search.
pub trait Termination {
    fn is_terminal(&self, id: VertexId) -> bool;

    /// Reject goals outside a graph of `vertex_count` vertices.
    fn validate(&self, vertex_count: usize) -> Result<(), SearchError>;
}

/// Point-to-point: stop at one goal vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleGoal(pub VertexId);

impl Termination for SingleGoal {
    #[inline]
    fn is_terminal(&self, id: VertexId) -> bool {
        self.0 == id
    }

    fn validate(&self, vertex_count: usize) -> Result<(), SearchError> {
        check_endpoint(self.0, vertex_count)
    }
}

/// Stop at whichever of several goals is settled first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnyGoal {
    goals: Vec<VertexId>,
}

impl AnyGoal {
    pub fn new(mut goals: Vec<VertexId>) -> Self {
        goals.sort_unstable();
        goals.dedup();
        Self { goals }
    }

    pub fn goals(&self) -> &[VertexId] {
        &self.goals
    }
}

impl FromIterator<VertexId> for AnyGoal {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Termination for AnyGoal {
    #[inline]
    fn is_terminal(&self, id: VertexId) -> bool {
        self.goals.binary_search(&id).is_ok()
    }

    fn validate(&self, vertex_count: usize) -> Result<(), SearchError> {
        // Sorted, so the last goal is the largest.
        match self.goals.last() {
            Some(&max) => check_endpoint(max, vertex_count),
            None => Ok(()),
        }
    }
}

/// Never stop early: settle everything reachable, building the full
/// shortest-path tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exhaustive;

impl Termination for Exhaustive {
    #[inline]
    fn is_terminal(&self, _id: VertexId) -> bool {
        false
    }

    fn validate(&self, _vertex_count: usize) -> Result<(), SearchError> {
        Ok(())
    }
}
