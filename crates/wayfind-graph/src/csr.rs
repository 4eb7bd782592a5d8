//! Compressed sparse row layout.
//!
//! All edges live in one buffer, grouped by source vertex. Each vertex owns
//! an `(offset, len)` span into that buffer, so enumeration is a single
//! contiguous slice. The layout is rebuilt from scratch whenever edges move,
//! including on [`reindex`](Graph::reindex).

use crate::error::{GraphError, check_vertex};
use crate::graph::{FromRecords, Graph, validate_records};
use crate::permutation::Permutation;
use crate::types::{
    Edge, EdgeWeight, GraphData, VertexId, VertexProperties, clamp_weight, is_weight_invalid,
};

/// Index span of one vertex's edges inside [`CsrGraph::edges`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Span {
    offset: usize,
    len: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CsrGraph {
    vertices: Vec<VertexProperties>,
    spans: Vec<Span>,
    edges: Vec<Edge>,
}

impl CsrGraph {
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Flatten per-vertex edge lists into a single buffer plus spans.
    fn from_collated(vertices: Vec<VertexProperties>, collated: Vec<Vec<Edge>>) -> Self {
        let total = collated.iter().map(Vec::len).sum();
        let mut edges = Vec::with_capacity(total);
        let mut spans = Vec::with_capacity(collated.len());
        for list in collated {
            spans.push(Span {
                offset: edges.len(),
                len: list.len(),
            });
            edges.extend(list);
        }
        Self {
            vertices,
            spans,
            edges,
        }
    }

    #[inline]
    fn edges_of(&self, i: usize) -> &[Edge] {
        let Span { offset, len } = self.spans[i];
        &self.edges[offset..offset + len]
    }
}

impl FromRecords for CsrGraph {
    fn from_records(data: &GraphData) -> Result<Self, GraphError> {
        validate_records(data)?;
        let mut collated = vec![Vec::new(); data.nodes.len()];
        for e in &data.edges {
            collated[e.source as usize].push(Edge {
                dst: e.dest,
                weight: clamp_weight(e.weight),
            });
        }
        let g = Self::from_collated(data.nodes.clone(), collated);
        log::debug!(
            "csr graph: {} vertices, {} edges",
            g.vertices.len(),
            g.edges.len()
        );
        Ok(g)
    }
}

impl Graph for CsrGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex(&self, id: VertexId) -> Result<VertexProperties, GraphError> {
        let i = check_vertex(id, self.vertices.len())?;
        Ok(self.vertices[i])
    }

    fn for_each_edge<F>(&self, id: VertexId, mut visitor: F) -> Result<(), GraphError>
    where
        F: FnMut(VertexId, EdgeWeight),
    {
        let i = check_vertex(id, self.vertices.len())?;
        for e in self.edges_of(i) {
            if !is_weight_invalid(e.weight) {
                visitor(e.dst, e.weight);
            }
        }
        Ok(())
    }

    fn reindex(&mut self, permutation: &Permutation) -> Result<(), GraphError> {
        permutation.check_len(self.vertices.len())?;
        let vertices = permutation.permute_vertices(&self.vertices);
        let mut collated = vec![Vec::new(); self.vertices.len()];
        for old in 0..self.vertices.len() {
            collated[permutation.apply(old as VertexId) as usize] = self
                .edges_of(old)
                .iter()
                .map(|e| Edge {
                    dst: permutation.apply(e.dst),
                    weight: e.weight,
                })
                .collect();
        }
        *self = Self::from_collated(vertices, collated);
        log::debug!("rebuilt csr graph after reindex ({} edges)", self.edges.len());
        Ok(())
    }
}
