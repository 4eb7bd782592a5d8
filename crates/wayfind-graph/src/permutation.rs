//! Vertex renumbering.
//!
//! A [`Permutation`] maps every old vertex id to a new one. Storage
//! strategies apply it through [`Graph::reindex`], which rewrites vertex
//! properties and both endpoints of every edge while keeping the graph
//! isomorphic to the original. [`shuffle`] draws a seeded random permutation
//! and applies it in one step, which is how memory-layout experiments
//! scatter neighbouring vertices across the id space.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{GraphError, PermutationError};
use crate::graph::Graph;
use crate::types::{VertexId, VertexProperties};

/// A bijection `old_id -> new_id` over `[0, len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<VertexId>", into = "Vec<VertexId>")
)]
pub struct Permutation {
    forward: Vec<VertexId>,
}

impl Permutation {
    /// Validate `forward` as a bijection, where `forward[old] == new`.
    pub fn new(forward: Vec<VertexId>) -> Result<Self, PermutationError> {
        let len = forward.len();
        let mut seen = vec![false; len];
        for (index, &value) in forward.iter().enumerate() {
            let Some(slot) = seen.get_mut(value as usize) else {
                return Err(PermutationError::OutOfRange { index, value });
            };
            if *slot {
                return Err(PermutationError::Duplicate { value });
            }
            *slot = true;
        }
        Ok(Self { forward })
    }

    /// The permutation that leaves every id in place.
    pub fn identity(len: usize) -> Self {
        Self {
            forward: (0..len as VertexId).collect(),
        }
    }

    /// A uniformly random permutation, reproducible from `seed`.
    pub fn random(len: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random_with(len, &mut rng)
    }

    /// A uniformly random permutation drawn from `rng`.
    pub fn random_with<R: rand::Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut forward: Vec<VertexId> = (0..len as VertexId).collect();
        forward.shuffle(rng);
        Self { forward }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// New id of `old`.
    ///
    /// # Panics
    ///
    /// Panics if `old` is not below [`len`](Self::len).
    #[inline]
    pub fn apply(&self, old: VertexId) -> VertexId {
        self.forward[old as usize]
    }

    /// The permutation undoing this one.
    pub fn inverse(&self) -> Self {
        let mut backward = vec![0; self.forward.len()];
        for (old, &new) in self.forward.iter().enumerate() {
            backward[new as usize] = old as VertexId;
        }
        Self { forward: backward }
    }

    #[inline]
    pub fn as_slice(&self) -> &[VertexId] {
        &self.forward
    }

    /// Reject a permutation that does not cover exactly `vertex_count` ids.
    pub(crate) fn check_len(&self, vertex_count: usize) -> Result<(), GraphError> {
        if self.forward.len() == vertex_count {
            Ok(())
        } else {
            log::warn!(
                "rejecting permutation of length {} for a graph of {} vertices",
                self.forward.len(),
                vertex_count
            );
            Err(PermutationError::LengthMismatch {
                expected: vertex_count,
                found: self.forward.len(),
            }
            .into())
        }
    }

    /// Vertex table indexed by new id. Assumes `check_len` passed.
    pub(crate) fn permute_vertices(&self, vertices: &[VertexProperties]) -> Vec<VertexProperties> {
        let mut out = vec![VertexProperties::default(); vertices.len()];
        for (old, props) in vertices.iter().enumerate() {
            out[self.forward[old] as usize] = *props;
        }
        out
    }
}

impl TryFrom<Vec<VertexId>> for Permutation {
    type Error = PermutationError;

    fn try_from(forward: Vec<VertexId>) -> Result<Self, Self::Error> {
        Self::new(forward)
    }
}

impl From<Permutation> for Vec<VertexId> {
    fn from(p: Permutation) -> Self {
        p.forward
    }
}

/// Renumber `graph` with a random permutation drawn from `seed`.
///
/// Returns the permutation applied, so callers can translate vertex ids they
/// hold (e.g. search endpoints) into the new numbering.
pub fn shuffle<G: Graph>(graph: &mut G, seed: u64) -> Result<Permutation, GraphError> {
    let permutation = Permutation::random(graph.vertex_count(), seed);
    graph.reindex(&permutation)?;
    Ok(permutation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_entry() {
        assert_eq!(
            Permutation::new(vec![0, 3, 1]),
            Err(PermutationError::OutOfRange { index: 1, value: 3 })
        );
    }

    #[test]
    fn rejects_duplicate() {
        assert_eq!(
            Permutation::new(vec![1, 0, 1]),
            Err(PermutationError::Duplicate { value: 1 })
        );
    }

    #[test]
    fn inverse_undoes_forward() {
        let p = Permutation::new(vec![2, 0, 3, 1]).unwrap();
        let inv = p.inverse();
        for old in 0..4 {
            assert_eq!(inv.apply(p.apply(old)), old);
        }
        assert_eq!(inv.inverse(), p);
    }

    #[test]
    fn random_is_seeded_bijection() {
        let a = Permutation::random(64, 7);
        let b = Permutation::random(64, 7);
        assert_eq!(a, b);
        assert!(Permutation::new(a.as_slice().to_vec()).is_ok());
        assert_ne!(a, Permutation::identity(64));
    }

    #[test]
    fn permute_vertices_moves_to_new_slot() {
        let p = Permutation::new(vec![1, 2, 0]).unwrap();
        let vs = [
            VertexProperties::new(0.0, 0.0),
            VertexProperties::new(1.0, 0.0),
            VertexProperties::new(2.0, 0.0),
        ];
        let out = p.permute_vertices(&vs);
        assert_eq!(out[1], vs[0]);
        assert_eq!(out[2], vs[1]);
        assert_eq!(out[0], vs[2]);
    }

    #[test]
    fn check_len_mismatch() {
        let p = Permutation::identity(3);
        assert_eq!(
            p.check_len(4),
            Err(GraphError::InvalidPermutation(PermutationError::LengthMismatch {
                expected: 4,
                found: 3
            }))
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn deserialization_validates() {
        let p: Permutation = serde_json::from_str("[2, 0, 1]").unwrap();
        assert_eq!(p.apply(0), 2);
        assert!(serde_json::from_str::<Permutation>("[0, 0, 1]").is_err());
        assert_eq!(serde_json::to_string(&p).unwrap(), "[2,0,1]");
    }
}
