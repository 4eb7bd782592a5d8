//! Straight-line heuristic context (A*).
//!
//! [`EuclideanContext`] is a drop-in replacement for the plain context: the
//! engine is unchanged, but frontier entries are ordered by accumulated
//! weight plus the straight-line distance from the candidate to the goal.
//! The [`Transition`]s handed back by `dequeue` still carry the true
//! accumulated weight.
//!
//! The estimate is the floor of the Euclidean distance between vertex
//! coordinates. It never overestimates as long as every edge weighs at least
//! the distance between its endpoints.

use std::cmp::Ordering;

use wayfind_graph::{EdgeWeight, Graph, VertexId};

use crate::context::{ContextConfig, GoalDirected, SearchContext};
use crate::error::{SearchError, check_endpoint};
use crate::transition::{Frontier, Transition};
use crate::visited::{DenseVisited, VisitedMap};

/// Frontier entry ordered by `key = weight + estimate(succ)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Keyed {
    key: EdgeWeight,
    transition: Transition,
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then(self.transition.cmp(&other.transition))
    }
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Point-to-point context biased toward the goal by a Euclidean estimate.
#[derive(Debug, Clone)]
pub struct EuclideanContext<V = DenseVisited> {
    frontier: Frontier<Keyed>,
    visited: V,
    goal: VertexId,
    estimates: Vec<EdgeWeight>,
}

impl<V: VisitedMap> EuclideanContext<V> {
    pub fn to_goal(goal: VertexId) -> Self {
        Self::with_config(ContextConfig::default(), goal)
    }

    pub fn with_config(config: ContextConfig, goal: VertexId) -> Self {
        Self {
            frontier: Frontier::with_capacity(config.frontier_capacity),
            visited: V::with_capacity(config.vertex_capacity),
            goal,
            estimates: Vec::with_capacity(config.vertex_capacity),
        }
    }

    /// Estimated remaining weight from `id` to the goal, as computed at the
    /// last reset. Zero for unknown ids.
    #[inline]
    pub fn estimate(&self, id: VertexId) -> EdgeWeight {
        self.estimates.get(id as usize).copied().unwrap_or(0)
    }

    pub fn settled_count(&self) -> usize {
        self.visited.len()
    }
}

impl<V: VisitedMap> SearchContext for EuclideanContext<V> {
    fn reset<G: Graph>(&mut self, graph: &G, start: VertexId) -> Result<(), SearchError> {
        let n = graph.vertex_count();
        check_endpoint(start, n)?;
        let target = graph.vertex(self.goal)?;

        self.estimates.clear();
        for id in 0..n as VertexId {
            // Float-to-int `as` truncates toward zero and saturates.
            let d = graph.vertex(id)?.distance(&target);
            self.estimates.push(d as EdgeWeight);
        }

        self.frontier.clear();
        self.visited.reset(n);
        self.enqueue(start, start, 0);
        Ok(())
    }

    #[inline]
    fn has_work(&self) -> bool {
        !self.frontier.is_empty()
    }

    #[inline]
    fn dequeue(&mut self) -> Result<Transition, SearchError> {
        self.frontier
            .pop()
            .map(|k| k.transition)
            .ok_or(SearchError::EmptyFrontier)
    }

    #[inline]
    fn enqueue(&mut self, pred: VertexId, succ: VertexId, weight: EdgeWeight) {
        let key = weight.saturating_add(self.estimate(succ));
        self.frontier.push(Keyed {
            key,
            transition: Transition { pred, succ, weight },
        });
    }

    #[inline]
    fn is_visited(&self, id: VertexId) -> bool {
        self.visited.contains(id)
    }

    #[inline]
    fn mark_visited(&mut self, pred: VertexId, id: VertexId) {
        self.visited.insert(id, pred);
    }

    #[inline]
    fn predecessor(&self, id: VertexId) -> VertexId {
        self.visited.get(id).unwrap_or(id)
    }

    #[inline]
    fn is_terminal(&self, id: VertexId) -> bool {
        self.goal == id
    }
}

impl<V: VisitedMap> GoalDirected for EuclideanContext<V> {
    fn set_goal(&mut self, goal: VertexId) {
        self.goal = goal;
    }

    fn goal(&self) -> VertexId {
        self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visited::HashVisited;
    use wayfind_graph::{EdgeRecord, FromRecords, GraphData, VecAdjacencyGraph, VertexProperties};

    fn row() -> VecAdjacencyGraph {
        let nodes = vec![
            VertexProperties::new(0.0, 0.0),
            VertexProperties::new(3.0, 4.0),
            VertexProperties::new(6.5, 8.0),
        ];
        let edges = vec![EdgeRecord::new(0, 1, 5), EdgeRecord::new(1, 2, 5)];
        VecAdjacencyGraph::from_records(&GraphData::new(nodes, edges)).unwrap()
    }

    #[test]
    fn estimates_computed_against_goal() {
        let g = row();
        let mut ctx = EuclideanContext::<HashVisited>::to_goal(0);
        ctx.reset(&g, 2).unwrap();
        assert_eq!(ctx.estimate(0), 0);
        assert_eq!(ctx.estimate(1), 5);
        // sqrt(6.5^2 + 8^2) = 10.307..., floored.
        assert_eq!(ctx.estimate(2), 10);
    }

    #[test]
    fn dequeue_returns_true_weight() {
        let g = row();
        let mut ctx = EuclideanContext::<DenseVisited>::to_goal(0);
        ctx.reset(&g, 0).unwrap();
        let _ = ctx.dequeue().unwrap();
        ctx.enqueue(0, 2, 3);
        ctx.enqueue(0, 1, 4);
        // Keys: vertex 2 -> 3 + 10, vertex 1 -> 4 + 5.
        assert_eq!(ctx.dequeue(), Ok(Transition::new(0, 1, 4)));
        assert_eq!(ctx.dequeue(), Ok(Transition::new(0, 2, 3)));
    }

    #[test]
    fn reset_rejects_out_of_range_goal() {
        let g = row();
        let mut ctx = EuclideanContext::<DenseVisited>::to_goal(9);
        assert!(matches!(ctx.reset(&g, 0), Err(SearchError::Graph(_))));
        ctx.set_goal(2);
        assert!(ctx.reset(&g, 0).is_ok());
    }
}
