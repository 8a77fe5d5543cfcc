//! Whole-walk traversal functions built on the iterators in
//! [`search`](crate::search).
//!
//! An out-of-range `start` yields an empty order; the `try_` variants report
//! it instead.
use std::collections::HashMap;

use crate::{
    error::Result,
    graph::{Graph, Vertex},
    search::{Bfs, Dfs, DfsPreorder},
    tracing_support::info_span,
    visited::VisitedSet,
};

/// Breadth-first visiting order from `start`.
pub fn bfs<G: Graph>(graph: &G, start: Vertex) -> Vec<Vertex> {
    let _span = info_span!("bfs", start).entered();
    Bfs::new(graph, start).collect()
}

/// Depth-first visiting order from `start`, computed with a stack of
/// vertices that are marked when popped.
pub fn dfs_iterative<G: Graph>(graph: &G, start: Vertex) -> Vec<Vertex> {
    let _span = info_span!("dfs_iterative", start).entered();
    Dfs::new(graph, start).collect()
}

/// Depth-first pre-order from `start`, as the classic recursive walk would
/// produce it.  The recursion is simulated with heap-allocated frames, so
/// long paths cannot overflow the call stack.
pub fn dfs_recursive<G: Graph>(graph: &G, start: Vertex) -> Vec<Vertex> {
    let _span = info_span!("dfs_recursive", start).entered();
    DfsPreorder::new(graph, start).collect()
}

/// Composable form of [`dfs_recursive`]: walks from `current`, skipping the
/// members of `visited`, and returns the newly visited vertices in pre-order
/// along with the grown visited set.
///
/// ```
/// use graphlab::{AdjacencyList, GraphMut, VisitedSet, traversal::dfs_recursive_from};
///
/// let mut graph = AdjacencyList::undirected(4);
/// graph.add_unit_edge(0, 1);
/// graph.add_unit_edge(2, 3);
///
/// let (first, visited) = dfs_recursive_from(&graph, 0, VisitedSet::new(4));
/// let (second, visited) = dfs_recursive_from(&graph, 2, visited);
/// assert_eq!(first, vec![0, 1]);
/// assert_eq!(second, vec![2, 3]);
/// assert_eq!(visited.len(), 4);
/// ```
pub fn dfs_recursive_from<G: Graph>(
    graph: &G,
    current: Vertex,
    visited: VisitedSet,
) -> (Vec<Vertex>, VisitedSet) {
    let mut walk = DfsPreorder::with_visited(graph, current, visited);
    let order = walk.by_ref().collect();
    (order, walk.into_visited())
}

pub fn try_bfs<G: Graph>(graph: &G, start: Vertex) -> Result<Vec<Vertex>> {
    graph.check_vertex(start)?;
    Ok(bfs(graph, start))
}

pub fn try_dfs_iterative<G: Graph>(graph: &G, start: Vertex) -> Result<Vec<Vertex>> {
    graph.check_vertex(start)?;
    Ok(dfs_iterative(graph, start))
}

pub fn try_dfs_recursive<G: Graph>(graph: &G, start: Vertex) -> Result<Vec<Vertex>> {
    graph.check_vertex(start)?;
    Ok(dfs_recursive(graph, start))
}

/// Number of edges on a shortest unweighted path from `start` to every
/// reachable vertex.
pub fn unweighted_distances<G: Graph>(graph: &G, start: Vertex) -> HashMap<Vertex, usize> {
    let _span = info_span!("unweighted_distances", start).entered();
    let mut distances = HashMap::new();
    if !graph.contains_vertex(start) {
        return distances;
    }
    distances.insert(start, 0);
    // BFS yields vertices in nondecreasing hop order, so the first time a
    // neighbor is seen fixes its distance.
    for current in Bfs::new(graph, start) {
        let next = distances[&current] + 1;
        for neighbor in graph.neighbors(current) {
            distances.entry(neighbor).or_insert(next);
        }
    }
    distances
}
