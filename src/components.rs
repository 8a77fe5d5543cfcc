//! Connected components.
//!
//! [`find_connected_components`] follows [`Graph::neighbors`] only.  On an
//! undirected graph that relation is symmetric and the result is the true
//! connected components.  On a directed graph it is not: each group holds
//! the vertices reachable by out-edges from its seed that no earlier group
//! claimed, which depends on vertex numbering.  Use
//! [`weakly_connected_components`] when edge direction should be ignored.
use std::collections::VecDeque;

use crate::{
    graph::{Graph, Vertex},
    search::Bfs,
    tracing_support::info_span,
    visited::VisitedSet,
};

/// Groups vertices by breadth-first expansion from each not-yet-visited
/// vertex in ascending index order.  Groups come out in seed order, and the
/// members of a group in BFS discovery order.
pub fn find_connected_components<G: Graph>(graph: &G) -> Vec<Vec<Vertex>> {
    let _span = info_span!("find_connected_components", num_vertices = graph.num_vertices())
        .entered();
    let mut components = Vec::new();
    let mut visited = VisitedSet::new(graph.num_vertices());
    for seed in graph.vertices() {
        if visited.contains(seed) {
            continue;
        }
        let mut bfs = Bfs::with_visited(graph, seed, visited);
        components.push(bfs.by_ref().collect());
        visited = bfs.into_visited();
    }
    components
}

/// Like [`find_connected_components`], but follows edges in both directions,
/// so directed graphs are grouped by weak connectivity.  From each vertex the
/// out-neighbors are explored first, then the in-neighbors in ascending order.
pub fn weakly_connected_components<G: Graph>(graph: &G) -> Vec<Vec<Vertex>> {
    if !graph.is_directed() {
        return find_connected_components(graph);
    }
    let _span = info_span!("weakly_connected_components", num_vertices = graph.num_vertices())
        .entered();

    let mut predecessors = vec![Vec::new(); graph.num_vertices()];
    for from in graph.vertices() {
        for into in graph.neighbors(from) {
            predecessors[into].push(from);
        }
    }

    let mut components = Vec::new();
    let mut visited = VisitedSet::new(graph.num_vertices());
    let mut queue = VecDeque::new();
    for seed in graph.vertices() {
        if !visited.insert(seed) {
            continue;
        }
        let mut component = Vec::new();
        queue.push_back(seed);
        while let Some(current) = queue.pop_front() {
            component.push(current);
            let successors = graph.neighbors(current);
            for neighbor in successors.chain(predecessors[current].iter().copied()) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        components.push(component);
    }
    components
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{
        GraphMut, adjacency_list::AdjacencyList, adjacency_matrix::AdjacencyMatrix,
        generate_graph::disjoint_cliques, graph_test_support::ArbGraph,
    };

    fn six_vertex_graph<G: GraphMut>() -> G {
        let mut graph = G::undirected(6);
        graph.add_unit_edge(0, 1);
        graph.add_unit_edge(1, 2);
        graph.add_unit_edge(3, 4);
        graph
    }

    #[test]
    fn test_components_in_seed_order() {
        let expected = vec![vec![0, 1, 2], vec![3, 4], vec![5]];
        assert_eq!(
            find_connected_components(&six_vertex_graph::<AdjacencyList>()),
            expected
        );
        assert_eq!(
            find_connected_components(&six_vertex_graph::<AdjacencyMatrix>()),
            expected
        );
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        let graph = AdjacencyList::undirected(0);
        assert!(find_connected_components(&graph).is_empty());
        assert!(weakly_connected_components(&AdjacencyList::directed(0)).is_empty());
    }

    #[test]
    fn test_members_follow_bfs_order() {
        let mut graph = AdjacencyList::undirected(4);
        graph.add_unit_edge(0, 3);
        graph.add_unit_edge(3, 1);
        graph.add_unit_edge(0, 2);
        assert_eq!(find_connected_components(&graph), vec![vec![0, 3, 2, 1]]);
    }

    #[test]
    fn test_directed_graph_groups_by_forward_reachability() {
        let mut graph = AdjacencyList::directed(3);
        graph.add_unit_edge(1, 0);
        graph.add_unit_edge(2, 1);
        assert_eq!(
            find_connected_components(&graph),
            vec![vec![0], vec![1], vec![2]]
        );
        assert_eq!(weakly_connected_components(&graph), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_weak_components_on_undirected_graph() {
        let graph = six_vertex_graph::<AdjacencyMatrix>();
        assert_eq!(
            weakly_connected_components(&graph),
            find_connected_components(&graph)
        );
    }

    #[test]
    fn test_one_component_per_clique() {
        let graph: AdjacencyMatrix = disjoint_cliques(&[3, 1, 4, 2], false.into());
        assert_eq!(
            find_connected_components(&graph),
            vec![vec![0, 1, 2], vec![3], vec![4, 5, 6, 7], vec![8, 9]]
        );
    }

    #[quickcheck]
    fn prop_components_partition_vertices(ArbGraph { graph }: ArbGraph<AdjacencyList>) -> bool {
        let mut seen: Vec<_> = find_connected_components(&graph)
            .into_iter()
            .flatten()
            .collect();
        seen.sort_unstable();
        seen.into_iter().eq(graph.vertices())
    }

    #[quickcheck]
    fn prop_weak_components_partition_vertices(
        ArbGraph { graph }: ArbGraph<AdjacencyMatrix>,
    ) -> bool {
        let mut seen: Vec<_> = weakly_connected_components(&graph)
            .into_iter()
            .flatten()
            .collect();
        seen.sort_unstable();
        seen.into_iter().eq(graph.vertices())
    }
}
