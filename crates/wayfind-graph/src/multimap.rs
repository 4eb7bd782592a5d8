//! Adjacency grouped by source vertex in an associative container.
//!
//! [`SortedMultiMapGraph`] keeps every edge in one ordered map keyed by
//! `(source, insertion sequence)` and enumerates a vertex's edges with a range
//! query. [`HashMultiMapGraph`] hashes the source id to a per-vertex edge list.

use std::collections::{BTreeMap, HashMap};

use crate::error::{GraphError, check_vertex};
use crate::graph::{FromRecords, Graph, validate_records};
use crate::permutation::Permutation;
use crate::types::{
    Edge, EdgeWeight, GraphData, VertexId, VertexProperties, clamp_weight, is_weight_invalid,
};

// ---------------------------------------------------------------------------
// Ordered
// ---------------------------------------------------------------------------

/// Edges in a single `BTreeMap`, O(log E) insertion and range lookup.
#[derive(Debug, Clone, Default)]
pub struct SortedMultiMapGraph {
    vertices: Vec<VertexProperties>,
    adjacencies: BTreeMap<(VertexId, usize), Edge>,
}

impl SortedMultiMapGraph {
    /// Number of stored edges, sentinel edges included.
    pub fn edge_count(&self) -> usize {
        self.adjacencies.len()
    }
}

impl FromRecords for SortedMultiMapGraph {
    fn from_records(data: &GraphData) -> Result<Self, GraphError> {
        validate_records(data)?;
        let adjacencies = data
            .edges
            .iter()
            .enumerate()
            .map(|(seq, e)| {
                let edge = Edge {
                    dst: e.dest,
                    weight: clamp_weight(e.weight),
                };
                ((e.source, seq), edge)
            })
            .collect::<BTreeMap<_, _>>();
        log::debug!(
            "sorted multimap graph: {} vertices, {} edges",
            data.nodes.len(),
            adjacencies.len()
        );
        Ok(Self {
            vertices: data.nodes.clone(),
            adjacencies,
        })
    }
}

impl Graph for SortedMultiMapGraph {
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
        check_vertex(id, self.vertices.len())?;
        for e in self.adjacencies.range((id, 0)..=(id, usize::MAX)).map(|(_, e)| e) {
            if !is_weight_invalid(e.weight) {
                visitor(e.dst, e.weight);
            }
        }
        Ok(())
    }

    fn reindex(&mut self, permutation: &Permutation) -> Result<(), GraphError> {
        permutation.check_len(self.vertices.len())?;
        let vertices = permutation.permute_vertices(&self.vertices);
        let adjacencies: BTreeMap<_, _> = self
            .adjacencies
            .iter()
            .map(|(&(src, seq), e)| {
                let edge = Edge {
                    dst: permutation.apply(e.dst),
                    weight: e.weight,
                };
                ((permutation.apply(src), seq), edge)
            })
            .collect();
        self.vertices = vertices;
        self.adjacencies = adjacencies;
        log::debug!("reindexed sorted multimap graph ({} edges)", self.adjacencies.len());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Hashed
// ---------------------------------------------------------------------------

/// Edges grouped per source in a `HashMap`; vertices without edges have no
/// entry.
#[derive(Debug, Clone, Default)]
pub struct HashMultiMapGraph {
    vertices: Vec<VertexProperties>,
    adjacencies: HashMap<VertexId, Vec<Edge>>,
}

impl HashMultiMapGraph {
    pub fn edge_count(&self) -> usize {
        self.adjacencies.values().map(Vec::len).sum()
    }
}

impl FromRecords for HashMultiMapGraph {
    fn from_records(data: &GraphData) -> Result<Self, GraphError> {
        validate_records(data)?;
        let mut adjacencies: HashMap<VertexId, Vec<Edge>> = HashMap::new();
        for e in &data.edges {
            adjacencies.entry(e.source).or_default().push(Edge {
                dst: e.dest,
                weight: clamp_weight(e.weight),
            });
        }
        log::debug!(
            "hash multimap graph: {} vertices, {} sources with edges",
            data.nodes.len(),
            adjacencies.len()
        );
        Ok(Self {
            vertices: data.nodes.clone(),
            adjacencies,
        })
    }
}

impl Graph for HashMultiMapGraph {
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
        check_vertex(id, self.vertices.len())?;
        let Some(edges) = self.adjacencies.get(&id) else {
            return Ok(());
        };
        for e in edges {
            if !is_weight_invalid(e.weight) {
                visitor(e.dst, e.weight);
            }
        }
        Ok(())
    }

    fn reindex(&mut self, permutation: &Permutation) -> Result<(), GraphError> {
        permutation.check_len(self.vertices.len())?;
        let vertices = permutation.permute_vertices(&self.vertices);
        let adjacencies: HashMap<VertexId, Vec<Edge>> = self
            .adjacencies
            .iter()
            .map(|(&src, edges)| {
                let edges = edges
                    .iter()
                    .map(|e| Edge {
                        dst: permutation.apply(e.dst),
                        weight: e.weight,
                    })
                    .collect();
                (permutation.apply(src), edges)
            })
            .collect();
        self.vertices = vertices;
        self.adjacencies = adjacencies;
        log::debug!("reindexed hash multimap graph ({} edges)", self.edge_count());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::testing;
    use crate::types::EdgeRecord;

    #[test]
    fn sorted_storage_contract() {
        testing::check_storage::<SortedMultiMapGraph>();
    }

    #[test]
    fn hash_storage_contract() {
        testing::check_storage::<HashMultiMapGraph>();
    }

    #[test]
    fn sorted_enumerates_in_insertion_order() {
        let data = GraphData::with_vertex_count(
            4,
            vec![
                EdgeRecord::new(1, 3, 2),
                EdgeRecord::new(0, 2, 1),
                EdgeRecord::new(1, 0, 5),
                EdgeRecord::new(1, 2, 7),
            ],
        );
        let g = SortedMultiMapGraph::from_records(&data).unwrap();
        let mut seen = Vec::new();
        g.for_each_edge(1, |d, w| seen.push((d, w))).unwrap();
        assert_eq!(seen, vec![(3, 2), (0, 5), (2, 7)]);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn hash_skips_vertices_without_edges() {
        let data = GraphData::with_vertex_count(3, vec![EdgeRecord::new(2, 0, 1)]);
        let g = HashMultiMapGraph::from_records(&data).unwrap();
        let mut n = 0;
        g.for_each_edge(0, |_, _| n += 1).unwrap();
        assert_eq!(n, 0);
        assert_eq!(g.edge_count(), 1);
    }
}
