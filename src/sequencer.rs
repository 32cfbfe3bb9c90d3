//! Greedy nearest-unvisited-neighbour traversal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::CandidateGraph;
use crate::spanning_tree::{SpanningTree, reduce_to_spanning_tree};

/// Which candidates the traversal considers at each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequenceStrategy {
    /// Nearest unvisited node over the complete graph.
    #[default]
    NearestNeighbor,
    /// Nearest unvisited spanning-tree neighbour of the current node, falling
    /// back to the complete graph when the current node has none left.
    SpanningTreeBiased,
}

impl fmt::Display for SequenceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceStrategy::NearestNeighbor => f.write_str("nearest"),
            SequenceStrategy::SpanningTreeBiased => f.write_str("spanning-tree"),
        }
    }
}

impl FromStr for SequenceStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "nearest" | "nearest-neighbor" => Ok(SequenceStrategy::NearestNeighbor),
            "spanning-tree" | "mst" => Ok(SequenceStrategy::SpanningTreeBiased),
            other => Err(format!(
                "unknown strategy `{other}` (expected `nearest` or `spanning-tree`)"
            )),
        }
    }
}

/// Visiting order of every node except `start_node`.
///
/// Ties are broken by the lowest node index.
pub fn sequence_nodes(
    graph: &CandidateGraph,
    start_node: usize,
    strategy: SequenceStrategy,
) -> Vec<usize> {
    let n = graph.node_count();
    if n <= 1 {
        return Vec::new();
    }

    let tree = match strategy {
        SequenceStrategy::NearestNeighbor => None,
        SequenceStrategy::SpanningTreeBiased => Some(reduce_to_spanning_tree(graph)),
    };

    let mut visited = vec![false; n];
    visited[start_node] = true;
    let mut order = Vec::with_capacity(n - 1);
    let mut current = start_node;

    while order.len() < n - 1 {
        let next = tree
            .as_ref()
            .and_then(|tree| nearest_tree_neighbor(graph, tree, current, &visited))
            .or_else(|| nearest_unvisited(graph, current, &visited));

        let Some(next) = next else {
            break;
        };
        visited[next] = true;
        order.push(next);
        current = next;
    }

    order
}

/// Orders `pool` starting from the origin node of `graph`.
///
/// `pool[k]` must be the stop at node `k + 1`. The result is a permutation
/// of `pool`.
pub fn sequence<S: Clone>(
    graph: &CandidateGraph,
    pool: &[S],
    strategy: SequenceStrategy,
) -> Vec<S> {
    debug_assert_eq!(graph.node_count(), pool.len() + 1);
    match pool {
        [] => Vec::new(),
        [only] => vec![only.clone()],
        _ => sequence_nodes(graph, CandidateGraph::ORIGIN, strategy)
            .into_iter()
            .map(|node| pool[node - 1].clone())
            .collect(),
    }
}

fn nearest_unvisited(graph: &CandidateGraph, from: usize, visited: &[bool]) -> Option<usize> {
    nearest_among(graph, from, (0..graph.node_count()).filter(|&node| !visited[node]))
}

fn nearest_tree_neighbor(
    graph: &CandidateGraph,
    tree: &SpanningTree,
    from: usize,
    visited: &[bool],
) -> Option<usize> {
    let mut candidates: Vec<usize> = tree
        .neighbors(from)
        .iter()
        .copied()
        .filter(|&node| !visited[node])
        .collect();
    candidates.sort_unstable();
    nearest_among(graph, from, candidates.into_iter())
}

/// Closest candidate to `from`; candidates must come in ascending index order
/// so that the first minimum wins ties.
fn nearest_among(
    graph: &CandidateGraph,
    from: usize,
    candidates: impl Iterator<Item = usize>,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for node in candidates {
        let distance = graph.weight(from, node);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((node, distance)),
        }
    }
    best.map(|(node, _)| node)
}
