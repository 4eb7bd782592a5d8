use wayfind_graph::{EdgeWeight, Graph, VertexId, is_weight_invalid};

use crate::context::{GoalDirected, SearchContext};
use crate::error::{SearchError, check_endpoint};
use crate::path::reconstruct_path;
use crate::transition::Transition;

/// How a completed search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A terminal vertex was settled at the given shortest distance.
    Found { vertex: VertexId, weight: EdgeWeight },
    /// The frontier ran dry without reaching a terminal vertex.
    Exhausted,
}

impl Outcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Run uniform-cost search from `start` until the context reports a terminal
/// vertex or the frontier is empty.
///
/// Vertices are settled the first time they are dequeued; later entries for
/// the same vertex are stale and skipped. Edge weights must be non-negative
/// (storage clamps them to at least 1), and accumulated weights must fit in
/// [`EdgeWeight`].
pub fn search<C, G>(ctx: &mut C, graph: &G, start: VertexId) -> Result<Outcome, SearchError>
where
    C: SearchContext,
    G: Graph,
{
    check_endpoint(start, graph.vertex_count())?;
    ctx.reset(graph, start)?;

    while ctx.has_work() {
        let Transition { pred, succ, weight } = ctx.dequeue()?;

        // Superseded by a cheaper entry that settled `succ` already.
        if ctx.is_visited(succ) {
            continue;
        }
        ctx.mark_visited(pred, succ);

        if ctx.is_terminal(succ) {
            log::trace!("search {start} -> {succ}: found at weight {weight}");
            return Ok(Outcome::Found {
                vertex: succ,
                weight,
            });
        }

        graph.for_each_edge(succ, |child, edge_weight| {
            if is_weight_invalid(edge_weight) || ctx.is_visited(child) {
                return;
            }
            ctx.enqueue(succ, child, weight + edge_weight);
        })?;
    }

    log::trace!("search from {start}: frontier exhausted");
    Ok(Outcome::Exhausted)
}

/// Point the context at `goal`, search from `start` and return the path,
/// or `None` if `goal` is unreachable.
pub fn find_path<C, G>(
    ctx: &mut C,
    graph: &G,
    start: VertexId,
    goal: VertexId,
) -> Result<Option<Vec<VertexId>>, SearchError>
where
    C: SearchContext + GoalDirected,
    G: Graph,
{
    ctx.set_goal(goal);
    match search(ctx, graph, start)? {
        Outcome::Found { vertex, .. } => reconstruct_path(&*ctx, vertex).map(Some),
        Outcome::Exhausted => Ok(None),
    }
}
