//! Counters collected while the search runs

use serde::{Deserialize, Serialize};

/// How the search nodes of one run were resolved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Search nodes visited
    pub nodes: u64,
    /// Nodes whose partial solution contained a cycle
    pub cyclic: u64,
    /// Nodes cut by the pruning bound
    pub unpromising: u64,
    /// Exclusions rejected because they split the partial solution
    pub disconnected: u64,
    /// Nodes where every vertex was decided and the candidate was a tree
    pub completed: u64,
    /// Table entries raised
    pub improvements: u64,
}

impl SearchStats {
    /// Total nodes and exclusions cut short
    pub fn pruned(&self) -> u64 {
        self.cyclic + self.unpromising + self.disconnected
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} nodes, {} completed, {} pruned ({} cyclic, {} unpromising, {} disconnected), {} improvements",
            self.nodes,
            self.completed,
            self.pruned(),
            self.cyclic,
            self.unpromising,
            self.disconnected,
            self.improvements
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pruned_total() {
        let stats = SearchStats {
            cyclic: 2,
            unpromising: 3,
            disconnected: 1,
            ..SearchStats::default()
        };
        assert_eq!(stats.pruned(), 6);
        assert!(stats.summary().contains("6 pruned"));
    }
}
