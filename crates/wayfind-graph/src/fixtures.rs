//! Small graphs shared by the test suites of this workspace.

use crate::types::{EdgeRecord, GraphData, VertexProperties};

/// `0->1 (4)`, `0->2 (1)`, `2->1 (1)`, `1->3 (1)`, `2->3 (5)`, vertex `i` at
/// `(i, 0)`.
///
/// The shortest `0 -> 3` path is `0, 2, 1, 3` at weight 3.
pub fn diamond() -> GraphData {
    GraphData::new(
        (0..4)
            .map(|i| VertexProperties::new(i as f64, 0.0))
            .collect(),
        vec![
            EdgeRecord::new(0, 1, 4),
            EdgeRecord::new(0, 2, 1),
            EdgeRecord::new(2, 1, 1),
            EdgeRecord::new(1, 3, 1),
            EdgeRecord::new(2, 3, 5),
        ],
    )
}
