//! `Graph` and `GraphMut` are the core traits of this library.  `Graph`
//! provides read-only access to the structure of a graph, while `GraphMut`
//! extends it with construction and edge mutation.
//!
//! Vertices are dense indices in `0..num_vertices()`, fixed when the graph is
//! created.  Every algorithm in the crate is written against these traits
//! only, so [`AdjacencyMatrix`](crate::AdjacencyMatrix) and
//! [`AdjacencyList`](crate::AdjacencyList) are interchangeable.
//!
//! # Out-of-range vertices
//!
//! The primary operations treat an out-of-range vertex as a no-op: mutations
//! leave the graph unchanged and queries return nothing.  Each of them has a
//! `try_` counterpart that reports [`GraphError::VertexOutOfRange`] instead.
use std::ops::Range;

use crate::{
    directedness::Directedness,
    error::{GraphError, Result},
    search::{Bfs, Dfs, DfsPostorder, DfsPreorder},
};

/// Index of a vertex in a graph.
pub type Vertex = usize;

/// Weight of an edge.
pub type Weight = i64;

/// Weight used by [`GraphMut::add_unit_edge`].
pub const DEFAULT_WEIGHT: Weight = 1;

/// A trait representing a directed or undirected graph with a fixed number of
/// vertices.
pub trait Graph {
    /// Gets the number of vertices in the graph.
    fn num_vertices(&self) -> usize;

    /// Gets the directedness the graph was created with.
    fn directedness(&self) -> Directedness;

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool {
        self.directedness().is_directed()
    }

    /// Gets the range of all vertex indices, in ascending order.
    fn vertices(&self) -> Range<Vertex> {
        0..self.num_vertices()
    }

    fn contains_vertex(&self, vertex: Vertex) -> bool {
        vertex < self.num_vertices()
    }

    /// Checks that a vertex is in range, returning an error describing it if
    /// it is not.
    fn check_vertex(&self, vertex: Vertex) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                num_vertices: self.num_vertices(),
            })
        }
    }

    /// Gets the outgoing edges of a vertex as `(neighbor, weight)` pairs, in
    /// the representation's natural order.  Empty if `vertex` is out of range.
    fn edges_with_weights(&self, vertex: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_;

    /// Gets the neighbors of a vertex, in the same order as
    /// [`Self::edges_with_weights`].  Empty if `vertex` is out of range.
    fn neighbors(&self, vertex: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.edges_with_weights(vertex).map(|(neighbor, _)| neighbor)
    }

    /// Like [`Self::neighbors`], but reports an out-of-range vertex.
    fn try_neighbors(&self, vertex: Vertex) -> Result<Vec<Vertex>> {
        self.check_vertex(vertex)?;
        Ok(self.neighbors(vertex).collect())
    }

    /// Gets the weight of the edge from `from` to `into`, if there is one.
    /// When there are parallel edges, the first one listed wins.
    fn edge_weight(&self, from: Vertex, into: Vertex) -> Option<Weight> {
        self.edges_with_weights(from)
            .find(|&(neighbor, _)| neighbor == into)
            .map(|(_, weight)| weight)
    }

    fn has_edge(&self, from: Vertex, into: Vertex) -> bool {
        self.edge_weight(from, into).is_some()
    }

    /// Gets the number of entries listed by [`Self::neighbors`].
    fn degree(&self, vertex: Vertex) -> usize {
        self.neighbors(vertex).count()
    }

    /// Gets the number of edges in the graph.  An undirected edge is counted
    /// once.
    fn num_edges(&self) -> usize;

    /// Breadth-first iterator starting at `start`.
    fn bfs(&self, start: Vertex) -> Bfs<'_, Self>
    where
        Self: Sized,
    {
        Bfs::new(self, start)
    }

    /// Depth-first iterator starting at `start` that marks vertices as they
    /// are popped from its stack.
    fn dfs(&self, start: Vertex) -> Dfs<'_, Self>
    where
        Self: Sized,
    {
        Dfs::new(self, start)
    }

    /// Depth-first pre-order iterator starting at `start`.
    fn dfs_preorder(&self, start: Vertex) -> DfsPreorder<'_, Self>
    where
        Self: Sized,
    {
        DfsPreorder::new(self, start)
    }

    /// Depth-first post-order iterator starting at `start`.
    fn dfs_postorder(&self, start: Vertex) -> DfsPostorder<'_, Self>
    where
        Self: Sized,
    {
        DfsPostorder::new(self, start)
    }
}

pub trait GraphMut: Graph + Sized {
    /// Creates a graph with `num_vertices` vertices and no edges.
    fn new(num_vertices: usize, directedness: Directedness) -> Self;

    fn directed(num_vertices: usize) -> Self {
        Self::new(num_vertices, Directedness::Directed)
    }

    fn undirected(num_vertices: usize) -> Self {
        Self::new(num_vertices, Directedness::Undirected)
    }

    /// Creates a graph and adds each `(from, into, weight)` edge in order.
    fn from_edges(
        num_vertices: usize,
        directedness: Directedness,
        edges: impl IntoIterator<Item = (Vertex, Vertex, Weight)>,
    ) -> Self {
        let mut graph = Self::new(num_vertices, directedness);
        for (from, into, weight) in edges {
            graph.add_edge(from, into, weight);
        }
        graph
    }

    /// Adds an edge from `from` to `into`, and from `into` to `from` when the
    /// graph is undirected.  Does nothing if either vertex is out of range.
    fn add_edge(&mut self, from: Vertex, into: Vertex, weight: Weight);

    /// Adds an edge with [`DEFAULT_WEIGHT`].
    fn add_unit_edge(&mut self, from: Vertex, into: Vertex) {
        self.add_edge(from, into, DEFAULT_WEIGHT);
    }

    /// Removes the edge from `from` to `into` (both directions when the graph
    /// is undirected).  Does nothing if there is no such edge or either vertex
    /// is out of range.
    fn remove_edge(&mut self, from: Vertex, into: Vertex);

    /// Removes every edge, keeping the vertices.
    fn clear(&mut self);

    /// Like [`Self::add_edge`], but reports an out-of-range vertex.
    fn try_add_edge(&mut self, from: Vertex, into: Vertex, weight: Weight) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(into)?;
        self.add_edge(from, into, weight);
        Ok(())
    }

    /// Like [`Self::remove_edge`], but reports an out-of-range vertex.  A
    /// missing edge is still not an error.
    fn try_remove_edge(&mut self, from: Vertex, into: Vertex) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(into)?;
        self.remove_edge(from, into);
        Ok(())
    }
}
