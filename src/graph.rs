//! Complete candidate graph over the origin and the stops still to visit.
//!
//! One edge per unordered pair, so N stops give N(N+1)/2 edges. Stop counts
//! are in the tens, and a dense graph keeps every later step trivial.

use crate::haversine::distance_km;
use crate::types::Position;

/// Undirected edge in the local index space. Always `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge {
    pub a: usize,
    pub b: usize,
    /// Great-circle distance in km.
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateGraph {
    /// Node 0 is the origin, node `k + 1` is the k-th stop.
    pub nodes: Vec<Position>,
    /// Edges in pair order: (0,1), (0,2), ..., (1,2), ...
    pub edges: Vec<WeightedEdge>,
}

impl CandidateGraph {
    /// Index of the origin node.
    pub const ORIGIN: usize = 0;

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edge weight between two nodes; zero on the diagonal.
    ///
    /// Panics if either index is out of range.
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return 0.0;
        }
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        self.edges[pair_index(self.nodes.len(), lo, hi)].distance
    }
}

/// Position of edge `(i, j)`, `i < j`, in pair-order generation.
fn pair_index(n: usize, i: usize, j: usize) -> usize {
    // edges before row i: (n-1) + (n-2) + ... + (n-i)
    i * (2 * n - i - 1) / 2 + (j - i - 1)
}

/// Builds the complete graph over `origin` followed by `stops`.
pub fn build_graph(origin: Position, stops: &[Position]) -> CandidateGraph {
    let mut nodes = Vec::with_capacity(stops.len() + 1);
    nodes.push(origin);
    nodes.extend_from_slice(stops);

    let n = nodes.len();
    let mut edges = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in i + 1..n {
            edges.push(WeightedEdge {
                a: i,
                b: j,
                distance: distance_km(nodes[i], nodes[j]),
            });
        }
    }

    CandidateGraph { nodes, edges }
}
