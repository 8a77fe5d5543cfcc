//! Topological ordering of directed acyclic graphs.
use crate::{
    error::{GraphError, Result},
    graph::{Graph, Vertex},
    search::{DfsPostorder, Frame},
    tracing_support::{debug, info_span},
    visited::VisitedSet,
};

/// Orders the vertices so that every edge points forward, by reversing the
/// depth-first post-order of walks started from each unvisited vertex in
/// ascending index order.
///
/// No cycle check is made.  If the graph has a cycle the result still lists
/// every vertex exactly once but is not a valid topological order; use
/// [`try_topological_sort`] to detect that case.  Undirected graphs count
/// every edge as a two-vertex cycle.
pub fn topological_sort<G: Graph>(graph: &G) -> Vec<Vertex> {
    let _span = info_span!("topological_sort", num_vertices = graph.num_vertices()).entered();
    let mut order = Vec::with_capacity(graph.num_vertices());
    let mut visited = VisitedSet::new(graph.num_vertices());
    for root in graph.vertices() {
        if visited.contains(root) {
            continue;
        }
        let mut walk = DfsPostorder::with_visited(graph, root, visited);
        order.extend(walk.by_ref());
        visited = walk.into_visited();
    }
    order.reverse();
    order
}

/// Like [`topological_sort`], but fails with [`GraphError::CycleDetected`]
/// when an edge leads back to a vertex whose walk is still in progress.
/// Produces the same order as [`topological_sort`] when it succeeds.
pub fn try_topological_sort<G: Graph>(graph: &G) -> Result<Vec<Vertex>> {
    let _span = info_span!("try_topological_sort", num_vertices = graph.num_vertices()).entered();
    let mut order = Vec::with_capacity(graph.num_vertices());
    let mut visited = VisitedSet::new(graph.num_vertices());
    let mut stack: Vec<Frame> = Vec::new();
    // Vertices whose frame is on the stack; an edge into one of them closes a
    // cycle.
    let mut open = vec![false; graph.num_vertices()];

    for root in graph.vertices() {
        if !visited.insert(root) {
            continue;
        }
        open[root] = true;
        stack.push(Frame::enter(graph, root));
        while let Some(frame) = stack.last_mut() {
            match frame.next_neighbor() {
                Some(neighbor) if open[neighbor] => {
                    debug!(vertex = neighbor, "back edge found");
                    return Err(GraphError::CycleDetected { vertex: neighbor });
                }
                Some(neighbor) => {
                    if visited.insert(neighbor) {
                        open[neighbor] = true;
                        stack.push(Frame::enter(graph, neighbor));
                    }
                }
                None => {
                    let vertex = frame.vertex;
                    stack.pop();
                    open[vertex] = false;
                    order.push(vertex);
                }
            }
        }
    }
    order.reverse();
    Ok(order)
}

/// Returns true if the graph has no cycle, treating undirected edges as
/// two-vertex cycles.
pub fn is_acyclic<G: Graph>(graph: &G) -> bool {
    try_topological_sort(graph).is_ok()
}
