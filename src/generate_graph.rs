//! Deterministic graph fixtures used by the test suites.
use crate::{
    directedness::Directedness,
    graph::{DEFAULT_WEIGHT, GraphMut},
};

/// Builds a graph made of complete subgraphs of the given sizes, with
/// consecutive vertex ranges and no edges between them.  Within a clique,
/// edges are added from each vertex to every later one.
pub fn disjoint_cliques<G: GraphMut>(sizes: &[usize], directedness: Directedness) -> G {
    let mut graph = G::new(sizes.iter().sum(), directedness);
    let mut first = 0;
    for &size in sizes {
        let members = first..first + size;
        for from in members.clone() {
            for into in from + 1..members.end {
                graph.add_unit_edge(from, into);
            }
        }
        first = members.end;
    }
    graph
}

/// Builds the path `0 - 1 - ... - (num_vertices - 1)`.  Edges point toward
/// the higher index when the graph is directed.
pub fn path_graph<G: GraphMut>(num_vertices: usize, directedness: Directedness) -> G {
    G::from_edges(
        num_vertices,
        directedness,
        (1..num_vertices).map(|into| (into - 1, into, DEFAULT_WEIGHT)),
    )
}

/// Builds a directed acyclic graph of `layers` layers of `width` vertices.
/// Each vertex gets an irregular set of edges into the next layer and a few
/// long-range edges that skip ahead; every edge points to a higher layer, so
/// vertex order is always a valid topological order.  Weights vary between
/// 1 and 9.
pub fn layered_dag<G: GraphMut>(layers: usize, width: usize) -> G {
    let mut graph = G::directed(layers * width);
    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            let from = layer * width + i;
            for j in 0..width {
                if (i * 7 + j * 11 + layer) % 10 < 3 {
                    let into = (layer + 1) * width + j;
                    graph.add_edge(from, into, ((i + j) % 9 + 1) as i64);
                }
            }
            if (from * 13) % 17 == 0 {
                let skip_to = layers.min(layer + 3) - 1;
                if skip_to > layer + 1 {
                    graph.add_edge(from, skip_to * width + (i * 5) % width, 9);
                }
            }
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdjacencyList, AdjacencyMatrix, Graph};

    #[test]
    fn test_disjoint_cliques() {
        let graph: AdjacencyList = disjoint_cliques(&[3, 2], Directedness::Undirected);
        assert_eq!(graph.num_vertices(), 5);
        assert_eq!(graph.num_edges(), 4);
        assert!(graph.has_edge(2, 0));
        assert!(!graph.has_edge(2, 3));
    }

    #[test]
    fn test_path_graph() {
        let graph: AdjacencyMatrix = path_graph(4, Directedness::Directed);
        assert_eq!(graph.num_edges(), 3);
        assert!(graph.has_edge(2, 3));
        assert!(!graph.has_edge(3, 2));
        let empty: AdjacencyMatrix = path_graph(0, Directedness::Directed);
        assert_eq!(empty.num_vertices(), 0);
    }

    #[test]
    fn test_layered_dag_edges_point_forward() {
        let width = 6;
        let graph: AdjacencyList = layered_dag(5, width);
        assert!(graph.num_edges() > 0);
        for from in graph.vertices() {
            for into in graph.neighbors(from) {
                assert!(into / width > from / width);
            }
        }
    }
}
