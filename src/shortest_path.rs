//! Single-source shortest paths.
use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use crate::{
    error::{GraphError, Result},
    graph::{Graph, Vertex},
    tracing_support::{debug, info_span},
    visited::VisitedSet,
};

/// Length of a path, as a sum of edge weights.
pub type Distance = i64;

/// Finds the length of the shortest path from `start` to every vertex
/// reachable from it, using Dijkstra's algorithm with a binary heap.
///
/// The heap may hold several entries for one vertex; an entry whose distance
/// is larger than the best one recorded is stale and skipped when popped.
/// Unreachable vertices are left out of the result, and so is everything if
/// `start` is out of range.
///
/// Edge weights must be non-negative.  This is not checked: with negative
/// weights the distances may be wrong, but the call still terminates, since
/// each vertex is expanded at most once.  [`try_dijkstra`] checks instead.
pub fn dijkstra<G: Graph>(graph: &G, start: Vertex) -> HashMap<Vertex, Distance> {
    let _span = info_span!("dijkstra", start).entered();
    if !graph.contains_vertex(start) {
        debug!(start, "dijkstra from out-of-range vertex");
        return HashMap::new();
    }
    // Only weight checking can fail, and it is off.
    run_dijkstra(graph, start, false).unwrap_or_default()
}

/// Like [`dijkstra`], but reports an out-of-range `start` and fails with
/// [`GraphError::NegativeWeight`] on the first negative edge it examines.
/// Every edge leaving a vertex reachable from `start` is examined.
pub fn try_dijkstra<G: Graph>(graph: &G, start: Vertex) -> Result<HashMap<Vertex, Distance>> {
    let _span = info_span!("try_dijkstra", start).entered();
    graph.check_vertex(start)?;
    run_dijkstra(graph, start, true)
}

fn run_dijkstra<G: Graph>(
    graph: &G,
    start: Vertex,
    reject_negative: bool,
) -> Result<HashMap<Vertex, Distance>> {
    // `None` is an infinite distance.
    let mut distances: Vec<Option<Distance>> = vec![None; graph.num_vertices()];
    let mut expanded = VisitedSet::new(graph.num_vertices());
    let mut queue = BinaryHeap::from([Reverse((0, start))]);
    distances[start] = Some(0);

    while let Some(Reverse((distance, current))) = queue.pop() {
        if distances[current].is_some_and(|best| distance > best) || !expanded.insert(current) {
            continue;
        }
        for (neighbor, weight) in graph.edges_with_weights(current) {
            if weight < 0 && reject_negative {
                return Err(GraphError::NegativeWeight {
                    from: current,
                    to: neighbor,
                    weight,
                });
            }
            if expanded.contains(neighbor) {
                continue;
            }
            let candidate = distance.saturating_add(weight);
            if distances[neighbor].is_none_or(|best| candidate < best) {
                distances[neighbor] = Some(candidate);
                queue.push(Reverse((candidate, neighbor)));
            }
        }
    }

    Ok(distances
        .into_iter()
        .enumerate()
        .filter_map(|(vertex, distance)| distance.map(|distance| (vertex, distance)))
        .collect())
}

/// Finds shortest paths from `start` to every reachable vertex.  Returns a
/// map from each reachable vertex to the path taken (both ends included) and
/// its total cost.  Costs agree with [`dijkstra`].
#[cfg(feature = "pathfinding")]
pub fn shortest_paths<G: Graph>(
    graph: &G,
    start: Vertex,
) -> HashMap<Vertex, (Vec<Vertex>, Distance)> {
    use pathfinding::prelude::{build_path, dijkstra_all};

    let _span = info_span!("shortest_paths", start).entered();
    if !graph.contains_vertex(start) {
        return HashMap::new();
    }
    let parents: HashMap<Vertex, (Vertex, Distance)> = dijkstra_all(&start, |&vertex| {
        graph.edges_with_weights(vertex).collect::<Vec<_>>()
    });
    let mut result: HashMap<Vertex, (Vec<Vertex>, Distance)> = parents
        .iter()
        .map(|(&vertex, &(_, cost))| (vertex, (build_path(&vertex, &parents), cost)))
        .collect();
    result.insert(start, (vec![start], 0));
    result
}
