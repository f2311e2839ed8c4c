//! Promising test for search nodes

use crate::analysis::ForestStats;
use crate::config::PruningBound;
use crate::table::LeafTable;

impl PruningBound {
    /// Leaves credited to a tree of `m + extra` vertices grown from a partial
    /// solution of `m` vertices described by `forest`. `extra` is at least 1.
    pub fn projected_leaves(self, forest: &ForestStats, m: usize, extra: usize) -> usize {
        match self {
            PruningBound::Heuristic => forest.leaves + extra - forest.connexity_lack,
            PruningBound::Admissible => {
                let size = m + extra;
                match size {
                    0 | 1 => 0,
                    2 => 2,
                    // Vertices of degree two or more stay internal
                    _ => size - forest.internal.max(1),
                }
            }
        }
    }

    /// Whether some final size reachable from this node could beat the table.
    ///
    /// `remaining` is the number of working-graph vertices not yet in the
    /// partial solution. Keeping the partial solution as is (no extra
    /// vertices) only counts if it is already connected.
    pub fn is_promising(
        self,
        table: &LeafTable,
        forest: &ForestStats,
        m: usize,
        remaining: usize,
    ) -> bool {
        if forest.is_tree() && table[m] < forest.leaves {
            return true;
        }
        (1..=remaining).any(|extra| table[m + extra] < self.projected_leaves(forest, m, extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest(leaves: usize, components: usize, internal: usize) -> ForestStats {
        ForestStats {
            leaves,
            connexity_lack: usize::from(components > 1),
            components,
            internal,
        }
    }

    #[test]
    fn test_heuristic_projection() {
        let bound = PruningBound::Heuristic;
        assert_eq!(bound.projected_leaves(&forest(2, 1, 1), 3, 2), 4);
        assert_eq!(bound.projected_leaves(&forest(2, 3, 0), 4, 1), 2);
    }

    #[test]
    fn test_admissible_projection() {
        let bound = PruningBound::Admissible;
        assert_eq!(bound.projected_leaves(&forest(0, 1, 0), 1, 1), 2);
        assert_eq!(bound.projected_leaves(&forest(0, 3, 0), 3, 1), 3);
        assert_eq!(bound.projected_leaves(&forest(2, 1, 2), 4, 2), 4);
    }

    #[test]
    fn test_single_vertex_to_edge() {
        // One isolated vertex with one neighbor left: only the admissible
        // bound sees that an edge has two leaves.
        let mut table = LeafTable::new(2);
        table.record(2, 1);
        let lone = forest(0, 1, 0);
        assert!(!PruningBound::Heuristic.is_promising(&table, &lone, 1, 1));
        assert!(PruningBound::Admissible.is_promising(&table, &lone, 1, 1));
    }

    #[test]
    fn test_disconnected_partial_needs_extra_vertices() {
        let table = LeafTable::new(4);
        let split = forest(2, 2, 0);
        assert!(!PruningBound::Heuristic.is_promising(&table, &split, 2, 0));
        assert!(PruningBound::Heuristic.is_promising(&table, &split, 2, 1));
    }
}
