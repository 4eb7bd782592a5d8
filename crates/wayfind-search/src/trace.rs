use wayfind_graph::{EdgeWeight, Graph, VertexId};

use crate::context::{GoalDirected, SearchContext};
use crate::error::SearchError;
use crate::transition::Transition;

/// Wraps a context and records the order in which vertices are settled.
///
/// The order of the current search is available from
/// [`visit_order`](Self::visit_order); [`keep_trace`](Self::keep_trace)
/// snapshots it so that a batch of searches yields one trace per problem.
#[derive(Debug, Clone, Default)]
pub struct TracingContext<C> {
    inner: C,
    order: Vec<VertexId>,
    traces: Vec<Vec<VertexId>>,
}

impl<C: SearchContext> TracingContext<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            order: Vec::new(),
            traces: Vec::new(),
        }
    }

    /// Vertices settled by the current search, in settling order.
    pub fn visit_order(&self) -> &[VertexId] {
        &self.order
    }

    /// Store a copy of the current visit order.
    pub fn keep_trace(&mut self) {
        self.traces.push(self.order.clone());
    }

    pub fn traces(&self) -> &[Vec<VertexId>] {
        &self.traces
    }

    pub fn take_traces(&mut self) -> Vec<Vec<VertexId>> {
        std::mem::take(&mut self.traces)
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: SearchContext> SearchContext for TracingContext<C> {
    fn reset<G: Graph>(&mut self, graph: &G, start: VertexId) -> Result<(), SearchError> {
        self.inner.reset(graph, start)?;
        self.order.clear();
        self.order.reserve(graph.vertex_count());
        Ok(())
    }

    #[inline]
    fn has_work(&self) -> bool {
        self.inner.has_work()
    }

    #[inline]
    fn dequeue(&mut self) -> Result<Transition, SearchError> {
        self.inner.dequeue()
    }

    #[inline]
    fn enqueue(&mut self, pred: VertexId, succ: VertexId, weight: EdgeWeight) {
        self.inner.enqueue(pred, succ, weight);
    }

    #[inline]
    fn is_visited(&self, id: VertexId) -> bool {
        self.inner.is_visited(id)
    }

    fn mark_visited(&mut self, pred: VertexId, id: VertexId) {
        self.inner.mark_visited(pred, id);
        self.order.push(id);
    }

    #[inline]
    fn predecessor(&self, id: VertexId) -> VertexId {
        self.inner.predecessor(id)
    }

    #[inline]
    fn is_terminal(&self, id: VertexId) -> bool {
        self.inner.is_terminal(id)
    }
}

impl<C: GoalDirected> GoalDirected for TracingContext<C> {
    fn set_goal(&mut self, goal: VertexId) {
        self.inner.set_goal(goal);
    }

    fn goal(&self) -> VertexId {
        self.inner.goal()
    }
}
