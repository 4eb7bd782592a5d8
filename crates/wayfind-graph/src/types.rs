//! Plain value types shared by every storage strategy.

/// Dense, zero-based vertex identifier in `[0, vertex_count)`.
pub type VertexId = u32;

/// Unsigned edge weight. Accumulated path weights use the same type.
pub type EdgeWeight = u32;

/// Sentinel weight marking an edge as absent. Never traversed.
pub const INVALID_WEIGHT: EdgeWeight = EdgeWeight::MAX;

/// Smallest weight a stored edge may carry.
pub const MIN_WEIGHT: EdgeWeight = 1;

/// Whether `w` is the "no edge" sentinel.
#[inline]
pub const fn is_weight_invalid(w: EdgeWeight) -> bool {
    w == INVALID_WEIGHT
}

/// Clamp an incoming weight to [`MIN_WEIGHT`]. The sentinel is left untouched.
#[inline]
pub const fn clamp_weight(w: EdgeWeight) -> EdgeWeight {
    if w < MIN_WEIGHT { MIN_WEIGHT } else { w }
}

/// Per-vertex properties: a 2D coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexProperties {
    pub x: f64,
    pub y: f64,
}

impl VertexProperties {
    /// Create a new vertex at `(x, y)`.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line (L2) distance to `other`.
    #[inline]
    pub fn distance(&self, other: &VertexProperties) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One outgoing edge as stored in an adjacency structure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Edge {
    pub(crate) dst: VertexId,
    pub(crate) weight: EdgeWeight,
}

/// A directed edge as supplied by a graph loader.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRecord {
    #[cfg_attr(feature = "serde", serde(alias = "u"))]
    pub source: VertexId,
    #[cfg_attr(feature = "serde", serde(alias = "v"))]
    pub dest: VertexId,
    #[cfg_attr(feature = "serde", serde(alias = "w"))]
    pub weight: EdgeWeight,
}

impl EdgeRecord {
    #[inline]
    pub const fn new(source: VertexId, dest: VertexId, weight: EdgeWeight) -> Self {
        Self {
            source,
            dest,
            weight,
        }
    }
}

/// Everything needed to build a graph: ordered vertices and edges.
///
/// Vertex `i` is `nodes[i]`. Edge order is preserved per source vertex by
/// every storage strategy except where noted.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphData {
    pub nodes: Vec<VertexProperties>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphData {
    pub fn new(nodes: Vec<VertexProperties>, edges: Vec<EdgeRecord>) -> Self {
        Self { nodes, edges }
    }

    /// Vertices with default coordinates, for tests and synthetic graphs.
    pub fn with_vertex_count(vertex_count: usize, edges: Vec<EdgeRecord>) -> Self {
        Self {
            nodes: vec![VertexProperties::default(); vertex_count],
            edges,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }
}
