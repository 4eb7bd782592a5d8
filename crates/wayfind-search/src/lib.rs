//! Representation-agnostic shortest-path search.
//!
//! One uniform-cost loop ([`search`]) runs over any [`Graph`] storage and any
//! [`SearchContext`] strategy. The context owns the frontier, the visited
//! map and the termination test; swapping it changes memory behaviour or
//! turns the search into A* without touching the loop.
//!
//! | Context | Visited map | Notes |
//! |---|---|---|
//! | [`OrderedContext`] | [`OrderedVisited`] | `BTreeMap` |
//! | [`HashContext`] | [`HashVisited`] | `HashMap` |
//! | [`DenseContext`] | [`DenseVisited`] | vector, sentinel marks unvisited |
//! | [`StampedContext`] | [`StampedVisited`] | vector, O(1) reset |
//! | [`EuclideanContext`] | any | frontier keyed by straight-line estimate |
//! | [`TracingContext`] | wrapped | records settling order |
//!
//! Contexts are built once and reused: every search starts with
//! [`SearchContext::reset`], which clears state without freeing buffers.
//!
//! ```
//! use wayfind_graph::{CsrGraph, EdgeRecord, FromRecords, GraphData};
//! use wayfind_search::{DenseContext, find_path};
//!
//! let data = GraphData::with_vertex_count(
//!     3,
//!     vec![EdgeRecord::new(0, 1, 2), EdgeRecord::new(1, 2, 2), EdgeRecord::new(0, 2, 7)],
//! );
//! let graph = CsrGraph::from_records(&data)?;
//! let mut ctx = DenseContext::to_goal(2);
//! assert_eq!(find_path(&mut ctx, &graph, 0, 2)?, Some(vec![0, 1, 2]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Graph`]: wayfind_graph::Graph

mod context;
mod engine;
mod error;
mod heuristic;
mod path;
mod termination;
mod trace;
mod transition;
mod visited;

#[cfg(test)]
mod testing;

pub use context::{
    Context, ContextConfig, DenseContext, GoalDirected, HashContext, OrderedContext,
    SearchContext, StampedContext,
};
pub use engine::{Outcome, find_path, search};
pub use error::SearchError;
pub use heuristic::EuclideanContext;
pub use path::{path_weight, reconstruct_path};
pub use termination::{AnyGoal, Exhaustive, SingleGoal, Termination};
pub use trace::TracingContext;
pub use transition::{Frontier, Transition};
pub use visited::{DenseVisited, HashVisited, OrderedVisited, StampedVisited, VisitedMap};
