//! Minimum spanning tree of the candidate graph (Kruskal).
//!
//! The tree is a locality hint for the sequencer, not a visiting order.

use crate::graph::{CandidateGraph, WeightedEdge};

/// Array-backed union-find over node indices, built per call.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
}

impl DisjointSetForest {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    /// Root of `x`, compressing the path on the way.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Joins the sets of `x` and `y`; the root of `y` is attached under the
    /// root of `x`. Returns false if they were already joined.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        self.parent[root_y] = root_x;
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    /// Accepted edges in acceptance order.
    pub edges: Vec<WeightedEdge>,
    /// Tree neighbours of every node, in acceptance order.
    pub adjacency: Vec<Vec<usize>>,
}

impl SpanningTree {
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|edge| edge.distance).sum()
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }
}

/// Reduces `graph` to a minimum spanning tree.
///
/// Equal-weight edges are taken in generation order, so the result is
/// deterministic.
pub fn reduce_to_spanning_tree(graph: &CandidateGraph) -> SpanningTree {
    let n = graph.node_count();
    let mut adjacency = vec![Vec::new(); n];
    let target = n.saturating_sub(1);
    let mut accepted = Vec::with_capacity(target);

    let mut sorted = graph.edges.clone();
    // stable: ties keep pair order
    sorted.sort_by(|x, y| x.distance.total_cmp(&y.distance));

    let mut forest = DisjointSetForest::new(n);
    for edge in sorted {
        if accepted.len() == target {
            break;
        }
        if forest.union(edge.a, edge.b) {
            adjacency[edge.a].push(edge.b);
            adjacency[edge.b].push(edge.a);
            accepted.push(edge);
        }
    }

    SpanningTree {
        edges: accepted,
        adjacency,
    }
}
