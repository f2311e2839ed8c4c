//! Recursive inclusion/exclusion search

use super::SearchStats;
use crate::analysis::analyze;
use crate::config::PruningBound;
use crate::graph::{VertexExclusion, WorkingGraph};
use crate::table::LeafTable;
use std::collections::BTreeSet;
use tracing::trace;

/// Result of one search run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Completed leaf table
    pub table: LeafTable,
    /// Counters for the run
    pub stats: SearchStats,
}

/// Branch-and-bound search that fills a [`LeafTable`].
///
/// Vertices are decided in index order. Including a vertex extends the
/// partial solution; excluding it deletes it from the working graph for the
/// duration of that branch and narrows the graph to the component that holds
/// the partial solution.
pub struct LeafSearch {
    table: LeafTable,
    universe: usize,
    bound: PruningBound,
    stats: SearchStats,
}

impl LeafSearch {
    /// Create a search over the vertex universe `0..universe`
    pub fn new(universe: usize, bound: PruningBound) -> Self {
        LeafSearch {
            table: LeafTable::new(universe),
            universe,
            bound,
            stats: SearchStats::default(),
        }
    }

    /// Table filled so far
    pub fn table(&self) -> &LeafTable {
        &self.table
    }

    /// Counters so far
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Run to completion on `graph`, which is restored before returning
    pub fn run(mut self, graph: &mut WorkingGraph) -> SearchOutcome {
        let mut partial = BTreeSet::new();
        self.explore(graph, 0, &mut partial);
        SearchOutcome {
            table: self.table,
            stats: self.stats,
        }
    }

    fn explore(&mut self, graph: &mut WorkingGraph, next: usize, partial: &mut BTreeSet<usize>) {
        self.stats.nodes += 1;

        let forest = match analyze(graph, partial) {
            Some(forest) => forest,
            None => {
                self.stats.cyclic += 1;
                return;
            }
        };
        let m = partial.len();

        if next >= self.universe {
            if forest.is_tree() {
                self.stats.completed += 1;
                if self.table.record(m, forest.leaves) {
                    self.stats.improvements += 1;
                    trace!(size = m, leaves = forest.leaves, "leaf table improved");
                }
            }
            return;
        }

        let remaining = graph.vertex_count().saturating_sub(m);
        if !self.bound.is_promising(&self.table, &forest, m, remaining) {
            self.stats.unpromising += 1;
            return;
        }

        if !graph.contains_vertex(next) {
            // Already outside the component under exploration
            self.explore(graph, next + 1, partial);
            return;
        }

        partial.insert(next);
        self.explore(graph, next + 1, partial);
        partial.remove(&next);

        let mut reduced = VertexExclusion::new(graph, next);
        match partial.first().copied() {
            None => self.explore(&mut reduced, next + 1, partial),
            Some(anchor) => {
                let component = reduced.component_containing(anchor);
                if !partial.is_subset(&component) {
                    self.stats.disconnected += 1;
                    trace!(vertex = next, "exclusion splits the partial solution");
                } else if component.len() < reduced.vertex_count() {
                    let mut restricted = reduced.induced_subgraph(&component);
                    self.explore(&mut restricted, next + 1, partial);
                } else {
                    self.explore(&mut reduced, next + 1, partial);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::exhaustive_leaf_table;
    use crate::graph::generators;
    use proptest::prelude::*;

    fn search(graph: &WorkingGraph, bound: PruningBound) -> SearchOutcome {
        let mut working = graph.clone();
        let outcome = LeafSearch::new(graph.universe(), bound).run(&mut working);
        assert_eq!(&working, graph);
        outcome
    }

    fn graph_from_bits(n: usize, bits: &[bool]) -> WorkingGraph {
        let mut graph = WorkingGraph::new(n);
        let pairs = (0..n).flat_map(|u| ((u + 1)..n).map(move |v| (u, v)));
        for ((u, v), &present) in pairs.zip(bits) {
            if present {
                graph.add_edge(u, v);
            }
        }
        graph
    }

    fn small_graph() -> impl Strategy<Value = WorkingGraph> {
        (1usize..=8).prop_flat_map(|n| {
            proptest::collection::vec(any::<bool>(), n * (n - 1) / 2)
                .prop_map(move |bits| graph_from_bits(n, &bits))
        })
    }

    #[test]
    fn test_empty_graph() {
        let outcome = search(&WorkingGraph::new(0), PruningBound::Heuristic);
        assert_eq!(outcome.table.as_slice(), &[0]);
        assert_eq!(outcome.stats.completed, 1);
    }

    #[test]
    fn test_single_edge() {
        let outcome = search(&generators::path(2), PruningBound::Heuristic);
        assert_eq!(outcome.table.as_slice(), &[0, 0, 2]);
    }

    #[test]
    fn test_cycle_excluded_at_full_size() {
        let outcome = search(&generators::cycle(5), PruningBound::Heuristic);
        assert_eq!(outcome.table.as_slice(), &[0, 0, 2, 2, 2, 0]);
        assert!(outcome.stats.cyclic > 0);
    }

    #[test]
    fn test_disconnection_is_detected() {
        // Star centered on 2: with {0, 1} included, excluding 2 separates them
        let graph = WorkingGraph::from_edges(4, &[(2, 0), (2, 1), (2, 3)]).unwrap();
        let outcome = search(&graph, PruningBound::Heuristic);
        assert!(outcome.stats.disconnected > 0);
        assert_eq!(outcome.table.as_slice(), &[0, 0, 2, 2, 3]);
    }

    #[test]
    fn test_admissible_matches_exhaustive_on_known_gap() {
        // Heuristic pruning misses the 5-vertex optimum here
        let graph = WorkingGraph::from_edges(
            7,
            &[(0, 1), (0, 4), (1, 4), (1, 5), (1, 6), (2, 3), (3, 4), (3, 6)],
        )
        .unwrap();
        let exact = exhaustive_leaf_table(&graph).unwrap();
        assert_eq!(exact[5], 3);

        let admissible = search(&graph, PruningBound::Admissible);
        assert_eq!(admissible.table, exact);

        let heuristic = search(&graph, PruningBound::Heuristic);
        assert_eq!(heuristic.table[5], 2);
    }

    proptest! {
        #[test]
        fn prop_admissible_is_exact(graph in small_graph()) {
            let exact = exhaustive_leaf_table(&graph).unwrap();
            let outcome = search(&graph, PruningBound::Admissible);
            prop_assert_eq!(outcome.table, exact);
        }

        #[test]
        fn prop_heuristic_never_overstates(graph in small_graph()) {
            let exact = exhaustive_leaf_table(&graph).unwrap();
            let outcome = search(&graph, PruningBound::Heuristic);
            prop_assert_eq!(outcome.table.len(), graph.universe() + 1);
            prop_assert_eq!(outcome.table[0], 0);
            prop_assert_eq!(outcome.table[1], 0);
            for (m, leaves) in outcome.table.iter() {
                prop_assert!(leaves <= exact[m]);
            }
        }
    }
}
