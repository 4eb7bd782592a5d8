//! One heap-allocated edge vector per vertex.

use crate::error::{GraphError, check_vertex};
use crate::graph::{FromRecords, Graph, validate_records};
use crate::permutation::Permutation;
use crate::types::{
    Edge, EdgeWeight, GraphData, VertexId, VertexProperties, clamp_weight, is_weight_invalid,
};

/// Per-vertex `Vec` of outgoing edges.
///
/// Enumeration within a vertex is contiguous, but each vertex's list lives
/// in its own allocation.
#[derive(Debug, Clone, Default)]
pub struct VecAdjacencyGraph {
    vertices: Vec<VertexProperties>,
    adjacencies: Vec<Vec<Edge>>,
}

impl VecAdjacencyGraph {
    pub fn edge_count(&self) -> usize {
        self.adjacencies.iter().map(Vec::len).sum()
    }
}

impl FromRecords for VecAdjacencyGraph {
    fn from_records(data: &GraphData) -> Result<Self, GraphError> {
        validate_records(data)?;
        let mut adjacencies = vec![Vec::new(); data.nodes.len()];
        for e in &data.edges {
            adjacencies[e.source as usize].push(Edge {
                dst: e.dest,
                weight: clamp_weight(e.weight),
            });
        }
        log::debug!(
            "vector adjacency graph: {} vertices, {} edges",
            data.nodes.len(),
            data.edges.len()
        );
        Ok(Self {
            vertices: data.nodes.clone(),
            adjacencies,
        })
    }
}

impl Graph for VecAdjacencyGraph {
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
        for e in &self.adjacencies[i] {
            if !is_weight_invalid(e.weight) {
                visitor(e.dst, e.weight);
            }
        }
        Ok(())
    }

    fn reindex(&mut self, permutation: &Permutation) -> Result<(), GraphError> {
        permutation.check_len(self.vertices.len())?;
        let vertices = permutation.permute_vertices(&self.vertices);
        let mut adjacencies = vec![Vec::new(); self.adjacencies.len()];
        for (old, edges) in self.adjacencies.iter().enumerate() {
            adjacencies[permutation.apply(old as VertexId) as usize] = edges
                .iter()
                .map(|e| Edge {
                    dst: permutation.apply(e.dst),
                    weight: e.weight,
                })
                .collect();
        }
        self.vertices = vertices;
        self.adjacencies = adjacencies;
        log::debug!("reindexed vector adjacency graph ({} edges)", self.edge_count());
        Ok(())
    }
}
