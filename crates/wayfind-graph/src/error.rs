use std::fmt;

use crate::types::VertexId;

/// Why a candidate permutation is not a bijection over `[0, vertex_count)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    /// The permutation does not cover the graph's full id range.
    LengthMismatch { expected: usize, found: usize },
    /// `permutation[index]` names an id outside the range.
    OutOfRange { index: usize, value: VertexId },
    /// Two old ids map to the same new id.
    Duplicate { value: VertexId },
}

impl fmt::Display for PermutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "expected {expected} entries, found {found}")
            }
            Self::OutOfRange { index, value } => {
                write!(f, "entry {index} maps to out-of-range id {value}")
            }
            Self::Duplicate { value } => write!(f, "id {value} is the image of more than one vertex"),
        }
    }
}

impl std::error::Error for PermutationError {}

/// Errors raised by graph construction, queries and reindexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id is not below the vertex count.
    OutOfRange { id: VertexId, vertex_count: usize },
    /// A reindex was requested with something that is not a bijection.
    InvalidPermutation(PermutationError),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { id, vertex_count } => {
                write!(f, "vertex {id} out of range (vertex count {vertex_count})")
            }
            Self::InvalidPermutation(e) => write!(f, "invalid permutation: {e}"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPermutation(e) => Some(e),
            Self::OutOfRange { .. } => None,
        }
    }
}

impl From<PermutationError> for GraphError {
    fn from(e: PermutationError) -> Self {
        Self::InvalidPermutation(e)
    }
}

/// Check `id` against `vertex_count`, returning it as an index.
#[inline]
pub(crate) fn check_vertex(id: VertexId, vertex_count: usize) -> Result<usize, GraphError> {
    let idx = id as usize;
    if idx < vertex_count {
        Ok(idx)
    } else {
        Err(GraphError::OutOfRange { id, vertex_count })
    }
}
