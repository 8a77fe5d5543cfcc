use std::fmt::Debug;

use crate::{
    directedness::Directedness,
    graph::{Graph, GraphMut, Vertex, Weight},
    tracing_support::debug,
};

/// Dense graph store backed by a `V × V` weight matrix, where `0` means "no
/// edge".
///
/// Edge lookup, insertion and removal are O(1), but listing the neighbors
/// of a vertex scans its whole row and costs O(V) regardless of its degree.
/// Space is O(V²).  When the graph is undirected the matrix is kept
/// symmetric.
///
/// Because `0` is the absence marker, adding an edge with weight `0` is the
/// same as removing it, and parallel edges cannot exist.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    weights: Vec<Weight>,
    size: usize,
    directedness: Directedness,
}

impl AdjacencyMatrix {
    /// Gets the linear storage index for the entry at `row` and `col`, if
    /// within bounds.
    fn index(&self, row: Vertex, col: Vertex) -> Option<usize> {
        (row < self.size && col < self.size).then(|| self.unchecked_index(row, col))
    }

    fn unchecked_index(&self, row: Vertex, col: Vertex) -> usize {
        row * self.size + col
    }

    fn row(&self, row: Vertex) -> &[Weight] {
        if row < self.size {
            let start = self.unchecked_index(row, 0);
            &self.weights[start..start + self.size]
        } else {
            &[]
        }
    }

    /// Sets the entry at `row` and `col`, and its mirror when undirected.
    /// Returns false if either index is out of range.
    fn set(&mut self, row: Vertex, col: Vertex, weight: Weight) -> bool {
        let (Some(index), Some(mirror)) = (self.index(row, col), self.index(col, row)) else {
            return false;
        };
        self.weights[index] = weight;
        if !self.directedness.is_directed() {
            self.weights[mirror] = weight;
        }
        true
    }

    /// Iterates over all nonzero entries as `(row, col, weight)`, row by row.
    pub fn entries(&self) -> impl Iterator<Item = (Vertex, Vertex, Weight)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight != 0)
            .map(|(index, &weight)| (index / self.size, index % self.size, weight))
    }
}

impl Graph for AdjacencyMatrix {
    fn num_vertices(&self) -> usize {
        self.size
    }

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    /// Scans the row of `vertex`; neighbors come out in ascending order.
    fn edges_with_weights(&self, vertex: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        self.row(vertex)
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight != 0)
            .map(|(col, &weight)| (col, weight))
    }

    fn edge_weight(&self, from: Vertex, into: Vertex) -> Option<Weight> {
        self.index(from, into)
            .map(|index| self.weights[index])
            .filter(|&weight| weight != 0)
    }

    fn num_edges(&self) -> usize {
        if self.directedness.is_directed() {
            self.entries().count()
        } else {
            self.entries().filter(|&(row, col, _)| row <= col).count()
        }
    }
}

impl GraphMut for AdjacencyMatrix {
    /// Panics if `num_vertices * num_vertices` overflows `usize`.
    fn new(num_vertices: usize, directedness: Directedness) -> Self {
        let len = num_vertices.checked_mul(num_vertices).unwrap_or_else(|| {
            panic!("adjacency matrix for {num_vertices} vertices overflows usize")
        });
        AdjacencyMatrix {
            weights: vec![0; len],
            size: num_vertices,
            directedness,
        }
    }

    fn add_edge(&mut self, from: Vertex, into: Vertex, weight: Weight) {
        if !self.set(from, into, weight) {
            debug!(from, into, "ignoring add_edge with out-of-range vertex");
        }
    }

    fn remove_edge(&mut self, from: Vertex, into: Vertex) {
        if !self.set(from, into, 0) {
            debug!(from, into, "ignoring remove_edge with out-of-range vertex");
        }
    }

    fn clear(&mut self) {
        self.weights.fill(0);
    }
}

impl Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjacencyMatrix")
            .field("num_vertices", &self.size)
            .field("directedness", &self.directedness)
            .field("entries", &self.entries().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_new_panics_when_size_overflows() {
        let num_vertices = 1 << (usize::BITS / 2);
        let graph = AdjacencyMatrix::directed(num_vertices);
        graph.neighbors(0).count();
    }

    #[test]
    fn test_undirected_matrix_is_symmetric() {
        let mut graph = AdjacencyMatrix::undirected(4);
        graph.add_edge(0, 3, 7);
        assert_eq!(graph.edge_weight(0, 3), Some(7));
        assert_eq!(graph.edge_weight(3, 0), Some(7));
        graph.remove_edge(3, 0);
        assert_eq!(graph.edge_weight(0, 3), None);
        assert_eq!(graph.edge_weight(3, 0), None);
    }

    #[test]
    fn test_directed_matrix_is_not_mirrored() {
        let mut graph = AdjacencyMatrix::directed(3);
        graph.add_edge(0, 1, 2);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
    }

    #[test]
    fn test_neighbors_are_ascending() {
        let mut graph = AdjacencyMatrix::directed(5);
        graph.add_unit_edge(2, 4);
        graph.add_unit_edge(2, 0);
        graph.add_unit_edge(2, 3);
        assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![0, 3, 4]);
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut graph = AdjacencyMatrix::directed(2);
        graph.add_edge(0, 1, 5);
        graph.add_edge(0, 1, 9);
        assert_eq!(graph.edges_with_weights(0).collect::<Vec<_>>(), vec![(1, 9)]);
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_zero_weight_clears_entry() {
        let mut graph = AdjacencyMatrix::undirected(2);
        graph.add_unit_edge(0, 1);
        graph.add_edge(0, 1, 0);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_num_edges_counts_undirected_edges_once() {
        let mut graph = AdjacencyMatrix::undirected(3);
        graph.add_unit_edge(0, 1);
        graph.add_unit_edge(1, 2);
        graph.add_unit_edge(2, 2);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.entries().count(), 5);
    }

    #[test]
    fn test_huge_index_does_not_overflow() {
        let mut graph = AdjacencyMatrix::directed(3);
        graph.add_unit_edge(usize::MAX, usize::MAX);
        assert_eq!(graph.neighbors(usize::MAX).count(), 0);
        assert_eq!(graph.edge_weight(usize::MAX, 0), None);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_debug() {
        let mut graph = AdjacencyMatrix::directed(2);
        graph.add_edge(1, 0, 4);
        let debug_str = format!("{:?}", graph);
        assert!(debug_str.contains("AdjacencyMatrix"));
        assert!(debug_str.contains("(1, 0, 4)"));
    }
}
