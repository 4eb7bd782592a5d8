use std::fmt;

use wayfind_graph::{GraphError, VertexId};

/// Errors raised by a search or by reconstructing its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A graph query failed, typically an out-of-range endpoint.
    Graph(GraphError),
    /// `dequeue` was called with nothing on the frontier.
    EmptyFrontier,
    /// A path was requested to a vertex the search never settled.
    NoPathReconstructed { goal: VertexId },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graph(e) => write!(f, "graph error: {e}"),
            Self::EmptyFrontier => write!(f, "dequeue on an empty frontier"),
            Self::NoPathReconstructed { goal } => {
                write!(f, "no path to vertex {goal}: search did not reach it")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for SearchError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

/// Fail fast on a search endpoint outside `[0, vertex_count)`.
#[inline]
pub(crate) fn check_endpoint(id: VertexId, vertex_count: usize) -> Result<(), SearchError> {
    if (id as usize) < vertex_count {
        Ok(())
    } else {
        Err(GraphError::OutOfRange { id, vertex_count }.into())
    }
}
