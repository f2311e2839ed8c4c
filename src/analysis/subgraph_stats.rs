//! Forest test and leaf statistics for an induced subgraph

use crate::graph::WorkingGraph;
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Statistics of an induced subgraph known to be a forest
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForestStats {
    /// Vertices of induced degree exactly 1
    pub leaves: usize,
    /// 1 if the forest has more than one component, else 0.
    ///
    /// Used as a lower bound on the extra internal vertices needed to join
    /// the components into one tree; it never exceeds 1.
    pub connexity_lack: usize,
    /// Number of connected components
    pub components: usize,
    /// Vertices of induced degree 2 or more
    pub internal: usize,
}

impl ForestStats {
    /// A single (possibly empty) tree
    pub fn is_tree(&self) -> bool {
        self.connexity_lack == 0
    }

    /// The `(leaves, connexity_lack)` pair
    pub fn as_signed_pair(&self) -> (i64, i64) {
        (self.leaves as i64, self.connexity_lack as i64)
    }
}

/// Flatten an analysis result to `(leaves, connexity_lack)`, with `(-1, -1)` for a cycle
pub fn signed_pair(result: Option<ForestStats>) -> (i64, i64) {
    result.map_or((-1, -1), |stats| stats.as_signed_pair())
}

/// Analyze the subgraph of `graph` induced by `vertices`.
///
/// Runs a breadth-first search restricted to `vertices`, one component at a
/// time. A vertex reached twice closes a cycle, reported as `None`. The empty
/// set is a tree with no leaves.
pub fn analyze(graph: &WorkingGraph, vertices: &BTreeSet<usize>) -> Option<ForestStats> {
    let mut stats = ForestStats::default();
    if vertices.is_empty() {
        return Some(stats);
    }

    let mut visited: HashSet<usize> = HashSet::with_capacity(vertices.len());
    let mut queue = VecDeque::new();

    for &root in vertices {
        if visited.contains(&root) {
            continue;
        }
        stats.components += 1;
        queue.push_back(root);

        while let Some(v) = queue.pop_front() {
            if !visited.insert(v) {
                return None;
            }
            let mut degree = 0;
            for u in graph.neighbors(v) {
                if vertices.contains(&u) {
                    degree += 1;
                    if !visited.contains(&u) {
                        queue.push_back(u);
                    }
                }
            }
            match degree {
                0 => {}
                1 => stats.leaves += 1,
                _ => stats.internal += 1,
            }
        }
    }

    stats.connexity_lack = usize::from(stats.components > 1);
    Some(stats)
}
