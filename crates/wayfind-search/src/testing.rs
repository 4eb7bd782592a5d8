//! Fixtures and a reference solver for tests.

use rand::Rng;
use wayfind_graph::{EdgeRecord, EdgeWeight, GraphData, VertexId, VertexProperties, clamp_weight};

pub(crate) use wayfind_graph::fixtures::diamond;

/// `edges` random edges over `vertices` vertices with weights in
/// `0..=max_weight`. Zero weights exercise the clamp.
pub(crate) fn random_graph<R: Rng>(
    rng: &mut R,
    vertices: u32,
    edges: usize,
    max_weight: EdgeWeight,
) -> GraphData {
    let records = (0..edges)
        .map(|_| {
            EdgeRecord::new(
                rng.random_range(0..vertices),
                rng.random_range(0..vertices),
                rng.random_range(0..=max_weight),
            )
        })
        .collect();
    GraphData::with_vertex_count(vertices as usize, records)
}

/// `vertices` points scattered over a `side x side` square, each with up to
/// `out_degree` edges to random targets. Every edge weighs at least the ceiling
/// of the distance between its endpoints, plus up to `slack`.
pub(crate) fn random_geometric_graph<R: Rng>(
    rng: &mut R,
    vertices: u32,
    out_degree: u32,
    side: f64,
    slack: EdgeWeight,
) -> GraphData {
    let nodes: Vec<VertexProperties> = (0..vertices)
        .map(|_| VertexProperties::new(rng.random_range(0.0..side), rng.random_range(0.0..side)))
        .collect();
    let mut edges = Vec::new();
    for u in 0..vertices {
        for _ in 0..rng.random_range(0..=out_degree) {
            let v = rng.random_range(0..vertices);
            let d = nodes[u as usize].distance(&nodes[v as usize]).ceil() as EdgeWeight;
            edges.push(EdgeRecord::new(u, v, d + rng.random_range(0..=slack)));
        }
    }
    GraphData::new(nodes, edges)
}

/// Single-source distances by Bellman-Ford, with the same weight clamp the
/// storages apply.
pub(crate) fn bellman_ford(data: &GraphData, start: VertexId) -> Vec<Option<EdgeWeight>> {
    let mut dist: Vec<Option<EdgeWeight>> = vec![None; data.vertex_count()];
    dist[start as usize] = Some(0);
    for _ in 0..data.vertex_count() {
        let mut changed = false;
        for e in &data.edges {
            let Some(d) = dist[e.source as usize] else {
                continue;
            };
            let candidate = d + clamp_weight(e.weight);
            let slot = &mut dist[e.dest as usize];
            if slot.is_none_or(|cur| candidate < cur) {
                *slot = Some(candidate);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    dist
}
