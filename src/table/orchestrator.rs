//! Table setup and search invocation

use super::LeafTable;
use crate::config::{PruningBound, SearchConfig};
use crate::graph::WorkingGraph;
use crate::search::{LeafSearch, SearchOutcome};
use crate::utils::timing::Timer;
use crate::Result;
use tracing::debug;

/// Compute the leaf table of `graph` with the default configuration.
///
/// The search runs on a private copy; `graph` is never touched.
pub fn compute_leaf_table(graph: &WorkingGraph) -> LeafTable {
    let mut working = graph.clone();
    run(&mut working, PruningBound::default()).table
}

/// Compute the leaf table of `graph` on a private copy, with counters
pub fn compute_leaf_table_with(graph: &WorkingGraph, config: &SearchConfig) -> Result<SearchOutcome> {
    config.validate()?;
    let mut working = graph.clone();
    Ok(run(&mut working, config.bound))
}

/// Compute the leaf table using `graph` itself as working storage.
///
/// Every vertex the search deletes is restored before this returns, so the
/// vertex and edge sets of `graph` come back unchanged.
pub fn compute_leaf_table_in_place(
    graph: &mut WorkingGraph,
    config: &SearchConfig,
) -> Result<SearchOutcome> {
    config.validate()?;
    Ok(run(graph, config.bound))
}

fn run(graph: &mut WorkingGraph, bound: PruningBound) -> SearchOutcome {
    let universe = graph.universe();
    debug!(vertices = universe, edges = graph.edge_count(), ?bound, "computing leaf table");

    let _timer = Timer::new("leaf table");
    let outcome = LeafSearch::new(universe, bound).run(graph);

    debug!(
        nodes = outcome.stats.nodes,
        pruned = outcome.stats.pruned(),
        improvements = outcome.stats.improvements,
        "leaf table complete"
    );
    outcome
}
