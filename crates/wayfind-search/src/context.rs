use wayfind_graph::{EdgeWeight, Graph, VertexId};

use crate::error::{SearchError, check_endpoint};
use crate::termination::{SingleGoal, Termination};
use crate::transition::{Frontier, Transition};
use crate::visited::{DenseVisited, HashVisited, OrderedVisited, StampedVisited, VisitedMap};

/// Mutable per-search state driven by [`search`](crate::search).
///
/// One context is meant to be reused for many searches on the same graph;
/// [`reset`](Self::reset) must leave it indistinguishable from a fresh one.
pub trait SearchContext {
    /// Clear all per-search state and seed the frontier with
    /// `start -> start` at weight 0.
    fn reset<G: Graph>(&mut self, graph: &G, start: VertexId) -> Result<(), SearchError>;

    /// Whether the frontier still holds entries.
    fn has_work(&self) -> bool;

    /// Remove the lowest-weight frontier entry.
    fn dequeue(&mut self) -> Result<Transition, SearchError>;

    /// Add a frontier entry. Never deduplicates.
    fn enqueue(&mut self, pred: VertexId, succ: VertexId, weight: EdgeWeight);

    fn is_visited(&self, id: VertexId) -> bool;

    /// Settle `id`, reached from `pred`. Must be called at most once per id
    /// between resets.
    fn mark_visited(&mut self, pred: VertexId, id: VertexId);

    /// The vertex that settled `id`, or `id` itself if it was never settled.
    fn predecessor(&self, id: VertexId) -> VertexId;

    fn is_terminal(&self, id: VertexId) -> bool;
}

/// Contexts that stop at a single configurable goal.
pub trait GoalDirected {
    fn set_goal(&mut self, goal: VertexId);

    fn goal(&self) -> VertexId;
}

/// Buffer sizing for a context, applied once at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextConfig {
    /// Vertices the visited map should hold without reallocating.
    pub vertex_capacity: usize,
    /// Entries the frontier should hold without reallocating.
    pub frontier_capacity: usize,
}

impl ContextConfig {
    /// Capacities matching `graph`'s vertex count.
    pub fn for_graph<G: Graph>(graph: &G) -> Self {
        let n = graph.vertex_count();
        Self {
            vertex_capacity: n,
            frontier_capacity: n,
        }
    }
}

/// The plain uniform-cost context: a frontier, a visited map and a
/// termination policy.
#[derive(Debug, Clone)]
pub struct Context<V = DenseVisited, T = SingleGoal> {
    frontier: Frontier<Transition>,
    visited: V,
    termination: T,
}

pub type OrderedContext = Context<OrderedVisited, SingleGoal>;
pub type HashContext = Context<HashVisited, SingleGoal>;
pub type DenseContext = Context<DenseVisited, SingleGoal>;
pub type StampedContext = Context<StampedVisited, SingleGoal>;

impl<V: VisitedMap, T: Termination> Context<V, T> {
    pub fn new(termination: T) -> Self {
        Self::with_config(ContextConfig::default(), termination)
    }

    pub fn with_config(config: ContextConfig, termination: T) -> Self {
        Self {
            frontier: Frontier::with_capacity(config.frontier_capacity),
            visited: V::with_capacity(config.vertex_capacity),
            termination,
        }
    }

    #[inline]
    pub fn termination(&self) -> &T {
        &self.termination
    }

    /// Replace the termination policy. Takes effect at the next reset.
    pub fn set_termination(&mut self, termination: T) {
        self.termination = termination;
    }

    /// Number of vertices settled by the current search.
    pub fn settled_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of frontier entries, stale ones included.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}

impl<V: VisitedMap> Context<V, SingleGoal> {
    /// A point-to-point context heading for `goal`.
    pub fn to_goal(goal: VertexId) -> Self {
        Self::new(SingleGoal(goal))
    }
}

impl<V: VisitedMap, T: Termination> SearchContext for Context<V, T> {
    fn reset<G: Graph>(&mut self, graph: &G, start: VertexId) -> Result<(), SearchError> {
        let n = graph.vertex_count();
        check_endpoint(start, n)?;
        self.termination.validate(n)?;
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
        self.frontier.pop().ok_or(SearchError::EmptyFrontier)
    }

    #[inline]
    fn enqueue(&mut self, pred: VertexId, succ: VertexId, weight: EdgeWeight) {
        self.frontier.push(Transition { pred, succ, weight });
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
        self.termination.is_terminal(id)
    }
}

impl<V: VisitedMap> GoalDirected for Context<V, SingleGoal> {
    fn set_goal(&mut self, goal: VertexId) {
        self.termination = SingleGoal(goal);
    }

    fn goal(&self) -> VertexId {
        self.termination.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_graph::{CsrGraph, FromRecords, GraphData};

    fn line(n: usize) -> CsrGraph {
        CsrGraph::from_records(&GraphData::with_vertex_count(n, Vec::new())).unwrap()
    }

    #[test]
    fn reset_seeds_self_transition() {
        let g = line(3);
        let mut ctx = HashContext::to_goal(2);
        ctx.reset(&g, 1).unwrap();
        assert!(ctx.has_work());
        assert_eq!(ctx.dequeue(), Ok(Transition::new(1, 1, 0)));
        assert!(!ctx.has_work());
        assert_eq!(ctx.dequeue(), Err(SearchError::EmptyFrontier));
    }

    #[test]
    fn reset_clears_previous_state() {
        let g = line(4);
        let mut ctx = DenseContext::with_config(ContextConfig::for_graph(&g), SingleGoal(3));
        ctx.reset(&g, 0).unwrap();
        ctx.mark_visited(0, 0);
        ctx.enqueue(0, 2, 5);
        ctx.enqueue(0, 3, 9);
        ctx.reset(&g, 2).unwrap();
        assert!(!ctx.is_visited(0));
        assert_eq!(ctx.settled_count(), 0);
        assert_eq!(ctx.frontier_len(), 1);
    }

    #[test]
    fn predecessor_of_unvisited_is_itself() {
        let g = line(3);
        let mut ctx = OrderedContext::to_goal(0);
        ctx.reset(&g, 0).unwrap();
        assert_eq!(ctx.predecessor(2), 2);
        ctx.mark_visited(1, 2);
        assert_eq!(ctx.predecessor(2), 1);
    }

    #[test]
    fn reset_rejects_out_of_range_ids() {
        let g = line(3);
        let mut ctx = StampedContext::to_goal(3);
        assert!(matches!(ctx.reset(&g, 0), Err(SearchError::Graph(_))));
        ctx.set_goal(1);
        assert!(matches!(ctx.reset(&g, 7), Err(SearchError::Graph(_))));
        assert!(ctx.reset(&g, 0).is_ok());
        assert_eq!(ctx.goal(), 1);
    }
}
