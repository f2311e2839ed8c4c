//! Reference leaf table by full subset enumeration

use super::analyze;
use crate::graph::WorkingGraph;
use crate::table::LeafTable;
use crate::{LeafTableError, Result};
use std::collections::BTreeSet;

/// Largest vertex count accepted by [`exhaustive_leaf_table`]
pub const EXHAUSTIVE_LIMIT: usize = 24;

/// Compute the leaf table by analyzing every subset of the present vertices.
///
/// Exponential in the vertex count; meant for cross-checking the search on
/// small graphs.
pub fn exhaustive_leaf_table(graph: &WorkingGraph) -> Result<LeafTable> {
    let vertices = graph.vertices();
    if vertices.len() > EXHAUSTIVE_LIMIT {
        return Err(LeafTableError::GraphTooLarge {
            vertex_count: vertices.len(),
            limit: EXHAUSTIVE_LIMIT,
        });
    }

    let mut table = LeafTable::new(graph.universe());
    for mask in 1u64..(1u64 << vertices.len()) {
        let subset: BTreeSet<usize> = vertices
            .iter()
            .enumerate()
            .filter(|&(bit, _)| (mask >> bit) & 1 == 1)
            .map(|(_, &v)| v)
            .collect();
        if let Some(stats) = analyze(graph, &subset) {
            if stats.is_tree() {
                table.record(subset.len(), stats.leaves);
            }
        }
    }
    Ok(table)
}
