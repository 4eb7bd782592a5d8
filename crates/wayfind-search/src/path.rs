use wayfind_graph::{EdgeWeight, Graph, GraphError, VertexId};

use crate::context::SearchContext;
use crate::error::SearchError;

/// Walk predecessors from `goal` back to the start and return the path
/// `start..=goal`.
///
/// The start vertex is its own predecessor, which ends the walk. Fails with
/// [`SearchError::NoPathReconstructed`] if the last search never settled
/// `goal`.
pub fn reconstruct_path<C>(ctx: &C, goal: VertexId) -> Result<Vec<VertexId>, SearchError>
where
    C: SearchContext + ?Sized,
{
    if !ctx.is_visited(goal) {
        return Err(SearchError::NoPathReconstructed { goal });
    }

    let mut path = vec![goal];
    let mut current = goal;
    loop {
        let pred = ctx.predecessor(current);
        if pred == current {
            break;
        }
        path.push(pred);
        current = pred;
    }
    path.reverse();
    Ok(path)
}

/// Total weight of `path`, taking the cheapest edge between each pair of
/// consecutive vertices. `None` if some step has no traversable edge.
pub fn path_weight<G: Graph>(graph: &G, path: &[VertexId]) -> Result<Option<EdgeWeight>, GraphError> {
    let mut total: EdgeWeight = 0;
    for step in path.windows(2) {
        let (from, to) = (step[0], step[1]);
        let mut best: Option<EdgeWeight> = None;
        graph.for_each_edge(from, |dst, w| {
            if dst == to {
                best = Some(best.map_or(w, |b| b.min(w)));
            }
        })?;
        match best {
            Some(w) => total += w,
            None => return Ok(None),
        }
    }
    Ok(Some(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::HashContext;
    use crate::testing::diamond;
    use wayfind_graph::{CsrGraph, FromRecords};

    #[test]
    fn walks_predecessors_back_to_start() {
        let g = CsrGraph::from_records(&diamond()).unwrap();
        let mut ctx = HashContext::to_goal(3);
        ctx.reset(&g, 0).unwrap();
        ctx.mark_visited(0, 0);
        ctx.mark_visited(0, 2);
        ctx.mark_visited(2, 1);
        ctx.mark_visited(1, 3);
        assert_eq!(reconstruct_path(&ctx, 3), Ok(vec![0, 2, 1, 3]));
        assert_eq!(reconstruct_path(&ctx, 2), Ok(vec![0, 2]));
    }

    #[test]
    fn unsettled_goal_is_an_error() {
        let g = CsrGraph::from_records(&diamond()).unwrap();
        let mut ctx = HashContext::to_goal(3);
        ctx.reset(&g, 0).unwrap();
        assert_eq!(
            reconstruct_path(&ctx, 3),
            Err(SearchError::NoPathReconstructed { goal: 3 })
        );
    }

    #[test]
    fn path_weight_uses_cheapest_parallel_edge() {
        let g = CsrGraph::from_records(&diamond()).unwrap();
        assert_eq!(path_weight(&g, &[0, 2, 1, 3]), Ok(Some(3)));
        assert_eq!(path_weight(&g, &[0, 1, 3]), Ok(Some(5)));
        assert_eq!(path_weight(&g, &[3, 0]), Ok(None));
        assert_eq!(path_weight(&g, &[1]), Ok(Some(0)));
        assert!(path_weight(&g, &[0, 9]).is_ok());
        assert!(path_weight(&g, &[9, 0]).is_err());
    }
}
