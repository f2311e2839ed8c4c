//! Mutable undirected graph over a fixed vertex universe

use crate::{LeafTableError, Result};
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::convert::TryFrom;

/// Plain description of a graph on the vertices `0..vertex_count`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Size of the vertex universe
    pub vertex_count: usize,
    /// Undirected edges as endpoint pairs
    pub edges: Vec<(usize, usize)>,
}

impl GraphSpec {
    /// Create from a vertex count and an edge list
    pub fn new(vertex_count: usize, edges: Vec<(usize, usize)>) -> Self {
        GraphSpec { vertex_count, edges }
    }
}

/// Undirected simple graph whose vertices are drawn from `0..universe`.
///
/// Vertices of the universe that are missing from the graph have been
/// excluded by the search on the current branch. Removal and restoration
/// keep the universe fixed, so table indices stay valid throughout.
#[derive(Clone, Debug)]
pub struct WorkingGraph {
    universe: usize,
    inner: UnGraphMap<usize, ()>,
}

impl WorkingGraph {
    /// Create a graph with `universe` isolated vertices
    pub fn new(universe: usize) -> Self {
        let mut inner = UnGraphMap::with_capacity(universe, 0);
        for v in 0..universe {
            inner.add_node(v);
        }
        WorkingGraph { universe, inner }
    }

    /// Create from an edge list, rejecting self-loops and out-of-range endpoints
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = WorkingGraph::new(vertex_count);
        for &(u, v) in edges {
            for vertex in [u, v] {
                if vertex >= vertex_count {
                    return Err(LeafTableError::VertexOutOfRange { vertex, vertex_count });
                }
            }
            if u == v {
                return Err(LeafTableError::SelfLoop(u));
            }
            graph.inner.add_edge(u, v, ());
        }
        Ok(graph)
    }

    /// Size of the vertex universe the graph was created with
    pub fn universe(&self) -> usize {
        self.universe
    }

    /// Number of vertices currently present
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of edges currently present
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Check whether a vertex is present
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.inner.contains_node(v)
    }

    /// Check whether an edge is present
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.inner.contains_edge(u, v)
    }

    /// Neighbors of `v` (empty if `v` is absent)
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.inner.neighbors(v)
    }

    /// Number of neighbors of `v`
    pub fn degree(&self, v: usize) -> usize {
        self.inner.neighbors(v).count()
    }

    /// Present vertices in increasing order
    pub fn vertices(&self) -> Vec<usize> {
        let mut vertices: Vec<usize> = self.inner.nodes().collect();
        vertices.sort_unstable();
        vertices
    }

    /// Edges as sorted `(min, max)` pairs
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .inner
            .all_edges()
            .map(|(u, v, _)| (u.min(v), u.max(v)))
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Delete `v` and its incident edges, returning the neighbors it had.
    ///
    /// Returns `None` and leaves the graph untouched if `v` is absent.
    pub fn remove_vertex(&mut self, v: usize) -> Option<Vec<usize>> {
        if !self.inner.contains_node(v) {
            return None;
        }
        let neighbors: Vec<usize> = self.inner.neighbors(v).collect();
        self.inner.remove_node(v);
        Some(neighbors)
    }

    /// Insert an edge between two present vertices
    pub fn add_edge(&mut self, u: usize, v: usize) {
        debug_assert!(
            self.inner.contains_node(u) && self.inner.contains_node(v),
            "edge ({}, {}) touches an absent vertex",
            u,
            v
        );
        self.inner.add_edge(u, v, ());
    }

    /// Re-insert `v` together with edges to each of `neighbors`
    pub fn restore_vertex(&mut self, v: usize, neighbors: &[usize]) {
        self.inner.add_node(v);
        for &u in neighbors {
            self.add_edge(v, u);
        }
    }

    /// Vertices of the connected component containing `v` (empty if `v` is absent)
    pub fn component_containing(&self, v: usize) -> BTreeSet<usize> {
        let mut component = BTreeSet::new();
        if !self.inner.contains_node(v) {
            return component;
        }
        let mut bfs = Bfs::new(&self.inner, v);
        while let Some(u) = bfs.next(&self.inner) {
            component.insert(u);
        }
        component
    }

    /// Subgraph induced by `vertices`, over the same universe
    pub fn induced_subgraph(&self, vertices: &BTreeSet<usize>) -> WorkingGraph {
        let mut inner = UnGraphMap::with_capacity(vertices.len(), 0);
        for &v in vertices {
            if self.inner.contains_node(v) {
                inner.add_node(v);
            }
        }
        for (u, v, _) in self.inner.all_edges() {
            if vertices.contains(&u) && vertices.contains(&v) {
                inner.add_edge(u, v, ());
            }
        }
        WorkingGraph {
            universe: self.universe,
            inner,
        }
    }

    /// Describe the graph as a [`GraphSpec`].
    ///
    /// Vertices absent from the graph come back as isolated vertices.
    pub fn to_spec(&self) -> GraphSpec {
        GraphSpec::new(self.universe, self.edges())
    }
}

/// Two graphs are equal when they have the same universe, vertices and edges
impl PartialEq for WorkingGraph {
    fn eq(&self, other: &Self) -> bool {
        self.universe == other.universe
            && self.vertices() == other.vertices()
            && self.edges() == other.edges()
    }
}

impl Eq for WorkingGraph {}

impl TryFrom<GraphSpec> for WorkingGraph {
    type Error = LeafTableError;

    fn try_from(spec: GraphSpec) -> Result<Self> {
        WorkingGraph::from_edges(spec.vertex_count, &spec.edges)
    }
}

impl From<&WorkingGraph> for GraphSpec {
    fn from(graph: &WorkingGraph) -> Self {
        graph.to_spec()
    }
}
