pub use crate::directedness::Directedness;
pub use crate::graph::{DEFAULT_WEIGHT, Graph, GraphMut, Vertex, Weight};
pub use crate::{AdjacencyList, AdjacencyMatrix};
