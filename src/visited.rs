use bitvec::vec::BitVec;

use crate::graph::Vertex;

/// A set of vertices of one graph, stored as one bit per vertex.
///
/// Vertices outside the range the set was created for are never members;
/// inserting one is a no-op that returns false.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitedSet {
    bits: BitVec,
    len: usize,
}

impl VisitedSet {
    /// Creates an empty set able to hold vertices `0..num_vertices`.
    pub fn new(num_vertices: usize) -> Self {
        VisitedSet {
            bits: BitVec::repeat(false, num_vertices),
            len: 0,
        }
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.bits.get(vertex).is_some_and(|bit| *bit)
    }

    /// Adds a vertex, returning true if it was not already present.
    pub fn insert(&mut self, vertex: Vertex) -> bool {
        if vertex >= self.bits.len() || self.bits[vertex] {
            return false;
        }
        self.bits.set(vertex, true);
        self.len += 1;
        true
    }

    /// Gets the number of vertices in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.bits.iter_ones()
    }
}
