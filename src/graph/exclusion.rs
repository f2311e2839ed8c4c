//! Scoped vertex exclusion with guaranteed restoration

use super::WorkingGraph;
use std::ops::{Deref, DerefMut};

/// A vertex temporarily deleted from a [`WorkingGraph`].
///
/// The guard dereferences to the reduced graph. When it goes out of scope the
/// vertex is re-inserted along with exactly the edges it had, whichever way
/// the enclosing branch exits.
pub struct VertexExclusion<'g> {
    graph: &'g mut WorkingGraph,
    vertex: usize,
    removed: Option<Vec<usize>>,
}

impl<'g> VertexExclusion<'g> {
    /// Delete `vertex` from `graph` until the guard is dropped
    pub fn new(graph: &'g mut WorkingGraph, vertex: usize) -> Self {
        let removed = graph.remove_vertex(vertex);
        VertexExclusion {
            graph,
            vertex,
            removed,
        }
    }

    /// The excluded vertex
    pub fn vertex(&self) -> usize {
        self.vertex
    }

    /// Neighbors the vertex had before exclusion (`None` if it was already absent)
    pub fn removed_neighbors(&self) -> Option<&[usize]> {
        self.removed.as_deref()
    }
}

impl Deref for VertexExclusion<'_> {
    type Target = WorkingGraph;

    fn deref(&self) -> &WorkingGraph {
        self.graph
    }
}

impl DerefMut for VertexExclusion<'_> {
    fn deref_mut(&mut self) -> &mut WorkingGraph {
        self.graph
    }
}

impl Drop for VertexExclusion<'_> {
    fn drop(&mut self) {
        if let Some(neighbors) = self.removed.take() {
            self.graph.restore_vertex(self.vertex, &neighbors);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generators;

    #[test]
    fn test_restore_on_drop() {
        let mut graph = generators::star(4);
        let original = graph.clone();
        {
            let excluded = VertexExclusion::new(&mut graph, 0);
            assert_eq!(excluded.vertex(), 0);
            assert_eq!(excluded.removed_neighbors().map(<[usize]>::len), Some(4));
            assert_eq!(excluded.edge_count(), 0);
            assert_eq!(excluded.vertex_count(), 4);
        }
        assert_eq!(graph, original);
    }

    #[test]
    fn test_nested_exclusions() {
        let mut graph = generators::cycle(5);
        let original = graph.clone();
        {
            let mut outer = VertexExclusion::new(&mut graph, 1);
            let inner = VertexExclusion::new(&mut outer, 3);
            assert_eq!(inner.vertices(), vec![0, 2, 4]);
            assert_eq!(inner.edges(), vec![(0, 4)]);
        }
        assert_eq!(graph, original);
    }

    #[test]
    fn test_absent_vertex_stays_absent() {
        let mut graph = generators::path(3);
        graph.remove_vertex(1);
        let reduced = graph.clone();
        {
            let excluded = VertexExclusion::new(&mut graph, 1);
            assert!(excluded.removed_neighbors().is_none());
        }
        assert_eq!(graph, reduced);
        assert!(!graph.contains_vertex(1));
    }
}
