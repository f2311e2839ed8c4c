//! Leaf tables for many graphs at once

use crate::config::SearchConfig;
use crate::graph::WorkingGraph;
use crate::search::SearchOutcome;
use crate::table::compute_leaf_table_with;
use crate::Result;
use rayon::prelude::*;
use tracing::debug;

/// Compute the leaf table of every graph in `graphs`, in input order.
///
/// Each graph gets its own private working copy, so runs are independent.
/// Batches of at least `config.parallel_threshold` graphs are spread over
/// the rayon thread pool.
pub fn compute_leaf_tables(graphs: &[WorkingGraph], config: &SearchConfig) -> Result<Vec<SearchOutcome>> {
    config.validate()?;

    let use_parallel = graphs.len() >= config.parallel_threshold;
    debug!(graphs = graphs.len(), parallel = use_parallel, "computing leaf tables");

    if use_parallel {
        graphs
            .par_iter()
            .map(|graph| compute_leaf_table_with(graph, config))
            .collect()
    } else {
        graphs
            .iter()
            .map(|graph| compute_leaf_table_with(graph, config))
            .collect()
    }
}
