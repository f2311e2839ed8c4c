//! Standard graph families on the vertices `0..n`

use super::WorkingGraph;
use rand::Rng;

/// Path `0 - 1 - ... - (n-1)`
pub fn path(n: usize) -> WorkingGraph {
    let edges: Vec<(usize, usize)> = (1..n).map(|v| (v - 1, v)).collect();
    from_valid_edges(n, &edges)
}

/// Star with center `0` and `leaves` spokes `1..=leaves`
pub fn star(leaves: usize) -> WorkingGraph {
    let edges: Vec<(usize, usize)> = (1..=leaves).map(|v| (0, v)).collect();
    from_valid_edges(leaves + 1, &edges)
}

/// Cycle on `n` vertices; for `n < 3` this is a path
pub fn cycle(n: usize) -> WorkingGraph {
    let mut edges: Vec<(usize, usize)> = (1..n).map(|v| (v - 1, v)).collect();
    if n >= 3 {
        edges.push((n - 1, 0));
    }
    from_valid_edges(n, &edges)
}

/// Complete graph on `n` vertices
pub fn complete(n: usize) -> WorkingGraph {
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u, v));
        }
    }
    from_valid_edges(n, &edges)
}

/// Disjoint union; vertices of `second` are shifted past those of `first`
pub fn disjoint_union(first: &WorkingGraph, second: &WorkingGraph) -> WorkingGraph {
    let offset = first.universe();
    let mut edges = first.edges();
    edges.extend(second.edges().into_iter().map(|(u, v)| (u + offset, v + offset)));
    from_valid_edges(offset + second.universe(), &edges)
}

/// Erdős–Rényi graph: each edge present independently with probability `p`
pub fn random<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> WorkingGraph {
    let p = p.clamp(0.0, 1.0);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(p) {
                edges.push((u, v));
            }
        }
    }
    from_valid_edges(n, &edges)
}

fn from_valid_edges(n: usize, edges: &[(usize, usize)]) -> WorkingGraph {
    let mut graph = WorkingGraph::new(n);
    for &(u, v) in edges {
        graph.add_edge(u, v);
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_families() {
        assert_eq!(path(4).edges(), vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(star(3).edges(), vec![(0, 1), (0, 2), (0, 3)]);
        assert_eq!(cycle(4).edge_count(), 4);
        assert_eq!(cycle(2).edge_count(), 1);
        assert_eq!(complete(5).edge_count(), 10);
        assert_eq!(path(0).vertex_count(), 0);
    }

    #[test]
    fn test_disjoint_union() {
        let union = disjoint_union(&complete(3), &path(2));
        assert_eq!(union.universe(), 5);
        assert_eq!(union.edges(), vec![(0, 1), (0, 2), (1, 2), (3, 4)]);
    }

    #[test]
    fn test_random_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random(6, 0.0, &mut rng).edge_count(), 0);
        assert_eq!(random(6, 1.0, &mut rng), complete(6));
    }
}
