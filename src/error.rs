use thiserror::Error;

use crate::graph::{Vertex, Weight};

/// Errors reported by the checked (`try_*`) operations.  The unchecked
/// operations never report these and treat the same situations as no-ops.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: Vertex, num_vertices: usize },

    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        from: Vertex,
        to: Vertex,
        weight: Weight,
    },

    #[error("graph contains a cycle through vertex {vertex}")]
    CycleDetected { vertex: Vertex },
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
