//! Graphs over dense vertex indices, with two interchangeable stores and the
//! classic traversal and path algorithms written against a common trait.
//!
//! [`AdjacencyMatrix`] keeps an `n * n` table of weights and answers edge
//! lookups in constant time.  [`AdjacencyList`] keeps one list of
//! `(neighbor, weight)` pairs per vertex and allows parallel edges.  Both
//! implement [`Graph`] and [`GraphMut`], and every algorithm accepts either.
pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod components;
pub mod directedness;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod shortest_path;
pub mod topo;
pub mod tracing_support;
pub mod traversal;
pub mod visited;

#[doc(hidden)]
pub mod generate_graph;
#[doc(hidden)]
pub mod graph_test_support;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use components::{find_connected_components, weakly_connected_components};
pub use directedness::Directedness;
pub use error::{GraphError, Result};
pub use graph::{DEFAULT_WEIGHT, Graph, GraphMut, Vertex, Weight};
#[cfg(feature = "pathfinding")]
pub use shortest_path::shortest_paths;
pub use shortest_path::{Distance, dijkstra, try_dijkstra};
pub use topo::{is_acyclic, topological_sort, try_topological_sort};
pub use traversal::{bfs, dfs_iterative, dfs_recursive};
pub use visited::VisitedSet;
