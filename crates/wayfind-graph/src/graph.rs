use crate::error::{GraphError, check_vertex};
use crate::permutation::Permutation;
use crate::types::{EdgeWeight, GraphData, VertexId, VertexProperties};

/// Read access to a static weighted digraph, plus in-place renumbering.
///
/// Implementors differ only in memory layout; searches over any of them
/// give the same distances.
pub trait Graph {
    /// Number of vertices. O(1).
    fn vertex_count(&self) -> usize;

    /// Properties of vertex `id`.
    fn vertex(&self, id: VertexId) -> Result<VertexProperties, GraphError>;

    /// Call `visitor(destination, weight)` once per outgoing edge of `id`.
    ///
    /// Edges carrying [`INVALID_WEIGHT`](crate::INVALID_WEIGHT) are skipped.
    /// Enumeration order depends on the storage strategy.
    fn for_each_edge<F>(&self, id: VertexId, visitor: F) -> Result<(), GraphError>
    where
        F: FnMut(VertexId, EdgeWeight);

    /// Renumber every vertex through `permutation` (`old -> new`).
    ///
    /// Either the whole graph is rewritten or, on error, left untouched.
    fn reindex(&mut self, permutation: &Permutation) -> Result<(), GraphError>;
}

/// Construction from loader records.
pub trait FromRecords: Sized {
    /// Build from `data`, clamping weights to at least 1.
    ///
    /// Fails with [`GraphError::OutOfRange`] if an edge names a vertex
    /// outside `[0, data.nodes.len())`.
    fn from_records(data: &GraphData) -> Result<Self, GraphError>;
}

/// Validate every edge endpoint in `data` before any storage is built.
pub(crate) fn validate_records(data: &GraphData) -> Result<(), GraphError> {
    let n = data.vertex_count();
    for e in &data.edges {
        check_vertex(e.source, n)?;
        check_vertex(e.dest, n)?;
    }
    Ok(())
}

/// All traversable edges of `graph` as sorted `(source, dest, weight)` triples.
///
/// Parallel edges are kept, so two graphs compare equal exactly when their
/// edge multisets match. Any enumeration error is passed through.
pub fn collect_edges<G: Graph>(
    graph: &G,
) -> Result<Vec<(VertexId, VertexId, EdgeWeight)>, GraphError> {
    let mut out = Vec::new();
    for src in 0..graph.vertex_count() as VertexId {
        graph.for_each_edge(src, |dst, w| out.push((src, dst, w)))?;
    }
    out.sort_unstable();
    Ok(out)
}
