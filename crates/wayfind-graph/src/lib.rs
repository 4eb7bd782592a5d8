//! Static weighted directed graphs for shortest-path benchmarking.
//!
//! Every storage strategy implements the same [`Graph`] capability set, so a
//! search written against the trait runs unchanged on any of them:
//!
//! | Type | Layout |
//! |---|---|
//! | [`SortedMultiMapGraph`] | ordered map keyed by `(source, sequence)` |
//! | [`HashMultiMapGraph`] | hash map from source to edge list |
//! | [`VecAdjacencyGraph`] | one edge vector per vertex |
//! | [`CsrGraph`] | flat edge buffer with per-vertex spans |
//!
//! Graphs are built from loader records ([`GraphData`]) through
//! [`FromRecords`] and are immutable afterwards except for
//! [`Graph::reindex`], which renumbers vertices through a [`Permutation`].

mod adjacency;
mod csr;
mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod fixtures;
mod graph;
mod multimap;
mod permutation;
mod types;

pub use adjacency::VecAdjacencyGraph;
pub use csr::CsrGraph;
pub use error::{GraphError, PermutationError};
pub use graph::{FromRecords, Graph, collect_edges};
pub use multimap::{HashMultiMapGraph, SortedMultiMapGraph};
pub use permutation::{Permutation, shuffle};
pub use types::{
    EdgeRecord, EdgeWeight, GraphData, INVALID_WEIGHT, MIN_WEIGHT, VertexId, VertexProperties,
    clamp_weight, is_weight_invalid,
};
