use crate::{
    directedness::Directedness,
    graph::{Graph, GraphMut, Vertex, Weight},
    tracing_support::debug,
};

/// Sparse graph store backed by one list of `(neighbor, weight)` pairs per
/// vertex.  Space is O(V + E) and listing neighbors costs O(degree).
///
/// Lists keep insertion order and are never deduplicated: adding the same
/// edge twice lists it twice.  Removal, on the other hand, drops every
/// matching entry.  In an undirected graph each edge is listed under both of
/// its ends, except a self-loop, which is listed once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<Vec<(Vertex, Weight)>>,
    directedness: Directedness,
}

impl AdjacencyList {
    fn in_range(&self, from: Vertex, into: Vertex) -> bool {
        self.contains_vertex(from) && self.contains_vertex(into)
    }

    /// Gets the raw list of `(neighbor, weight)` entries of a vertex.
    pub fn edges_of(&self, vertex: Vertex) -> &[(Vertex, Weight)] {
        self.lists.get(vertex).map_or(&[], Vec::as_slice)
    }

    fn num_entries(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    fn num_self_loops(&self) -> usize {
        self.lists
            .iter()
            .enumerate()
            .map(|(vertex, list)| list.iter().filter(|&&(n, _)| n == vertex).count())
            .sum()
    }
}

impl Graph for AdjacencyList {
    fn num_vertices(&self) -> usize {
        self.lists.len()
    }

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    /// Lists the entries of `vertex` in insertion order, duplicates included.
    fn edges_with_weights(&self, vertex: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        self.edges_of(vertex).iter().copied()
    }

    fn num_edges(&self) -> usize {
        if self.directedness.is_directed() {
            self.num_entries()
        } else {
            (self.num_entries() + self.num_self_loops()) / 2
        }
    }
}

impl GraphMut for AdjacencyList {
    fn new(num_vertices: usize, directedness: Directedness) -> Self {
        AdjacencyList {
            lists: vec![Vec::new(); num_vertices],
            directedness,
        }
    }

    fn add_edge(&mut self, from: Vertex, into: Vertex, weight: Weight) {
        if !self.in_range(from, into) {
            debug!(from, into, "ignoring add_edge with out-of-range vertex");
            return;
        }
        self.lists[from].push((into, weight));
        if !self.directedness.is_directed() && from != into {
            self.lists[into].push((from, weight));
        }
    }

    fn remove_edge(&mut self, from: Vertex, into: Vertex) {
        if !self.in_range(from, into) {
            debug!(from, into, "ignoring remove_edge with out-of-range vertex");
            return;
        }
        self.lists[from].retain(|&(neighbor, _)| neighbor != into);
        if !self.directedness.is_directed() {
            self.lists[into].retain(|&(neighbor, _)| neighbor != from);
        }
    }

    fn clear(&mut self) {
        self.lists.iter_mut().for_each(Vec::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_edges_accumulate() {
        let mut graph = AdjacencyList::directed(3);
        graph.add_edge(0, 1, 2);
        graph.add_edge(0, 1, 5);
        assert_eq!(graph.edges_of(0), &[(1, 2), (1, 5)]);
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1, 1]);
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.edge_weight(0, 1), Some(2));
    }

    #[test]
    fn test_remove_edge_clears_all_duplicates() {
        let mut graph = AdjacencyList::undirected(3);
        graph.add_unit_edge(0, 1);
        graph.add_unit_edge(0, 2);
        graph.add_unit_edge(0, 1);
        graph.remove_edge(1, 0);
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![2]);
        assert_eq!(graph.neighbors(1).count(), 0);
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let mut graph = AdjacencyList::directed(5);
        graph.add_unit_edge(2, 4);
        graph.add_unit_edge(2, 0);
        graph.add_unit_edge(2, 3);
        assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![4, 0, 3]);
    }

    #[test]
    fn test_undirected_self_loop_is_listed_once() {
        let mut graph = AdjacencyList::undirected(2);
        graph.add_unit_edge(1, 1);
        assert_eq!(graph.edges_of(1), &[(1, 1)]);
        assert_eq!(graph.num_edges(), 1);
        graph.add_unit_edge(0, 1);
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn test_zero_weight_edge_is_kept() {
        let mut graph = AdjacencyList::directed(2);
        graph.add_edge(0, 1, 0);
        assert_eq!(graph.edge_weight(0, 1), Some(0));
    }

    #[test]
    fn test_out_of_range_leaves_graph_unchanged() {
        let mut graph = AdjacencyList::undirected(10);
        graph.add_unit_edge(0, 1);
        let before = graph.clone();
        graph.add_unit_edge(usize::MAX, 0);
        graph.add_unit_edge(0, 10);
        graph.remove_edge(0, 999);
        assert_eq!(graph, before);
        assert_eq!(graph.neighbors(999).count(), 0);
        assert_eq!(graph.edges_of(999), &[]);
    }

    #[test]
    fn test_clear() {
        let mut graph = AdjacencyList::directed(3);
        graph.add_unit_edge(0, 1);
        graph.add_unit_edge(1, 2);
        graph.clear();
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.num_vertices(), 3);
    }
}
