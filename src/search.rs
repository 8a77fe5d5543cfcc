//! Lazy traversal iterators.
//!
//! Every iterator owns its [`VisitedSet`] and frontier, and none of them use
//! call-stack recursion, so arbitrarily deep graphs are safe to walk.  The
//! `with_visited` constructors and `into_visited` let several walks share one
//! visited set by passing it from walk to walk.
use std::collections::VecDeque;

use derivative::Derivative;

use crate::{
    graph::{Graph, Vertex},
    visited::VisitedSet,
};

/// Breadth-first iterator.  Vertices are marked when they are enqueued, so
/// each one is enqueued at most once.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Bfs<'g, G: Graph> {
    #[derivative(Debug = "ignore")]
    graph: &'g G,
    visited: VisitedSet,
    queue: VecDeque<Vertex>,
}

impl<'g, G> Bfs<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: Vertex) -> Self {
        Self::with_visited(graph, start, VisitedSet::new(graph.num_vertices()))
    }

    /// Starts a walk that treats the members of `visited` as already seen.
    /// Yields nothing if `start` is one of them or is out of range.
    pub fn with_visited(graph: &'g G, start: Vertex, mut visited: VisitedSet) -> Self {
        let mut queue = VecDeque::new();
        if graph.contains_vertex(start) && visited.insert(start) {
            queue.push_back(start);
        }
        Self {
            graph,
            visited,
            queue,
        }
    }

    /// Consumes the iterator, returning every vertex seen so far, including
    /// those still waiting in the queue.
    pub fn into_visited(self) -> VisitedSet {
        self.visited
    }
}

impl<'g, G> Iterator for Bfs<'g, G>
where
    G: Graph,
{
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        for neighbor in self.graph.neighbors(current) {
            if self.visited.insert(neighbor) {
                self.queue.push_back(neighbor);
            }
        }
        Some(current)
    }
}

/// Depth-first iterator over an explicit stack of vertices.  Vertices are
/// marked when popped, so a vertex may sit on the stack several times but is
/// yielded once.  Neighbors are pushed in reverse so they are popped in
/// listing order, which makes the visiting order match [`DfsPreorder`].
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Dfs<'g, G: Graph> {
    #[derivative(Debug = "ignore")]
    graph: &'g G,
    visited: VisitedSet,
    stack: Vec<Vertex>,
}

impl<'g, G> Dfs<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: Vertex) -> Self {
        Self::with_visited(graph, start, VisitedSet::new(graph.num_vertices()))
    }

    pub fn with_visited(graph: &'g G, start: Vertex, visited: VisitedSet) -> Self {
        let stack = if graph.contains_vertex(start) {
            vec![start]
        } else {
            Vec::new()
        };
        Self {
            graph,
            visited,
            stack,
        }
    }

    /// Consumes the iterator, returning the vertices yielded so far.
    pub fn into_visited(self) -> VisitedSet {
        self.visited
    }
}

impl<'g, G> Iterator for Dfs<'g, G>
where
    G: Graph,
{
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if self.visited.insert(current) {
                let mark = self.stack.len();
                self.stack.extend(
                    self.graph
                        .neighbors(current)
                        .filter(|&neighbor| !self.visited.contains(neighbor)),
                );
                self.stack[mark..].reverse();
                return Some(current);
            }
        }
        None
    }
}

/// One simulated call frame of a recursive depth-first walk: the vertex
/// being explored and a cursor over its remaining neighbors.
#[derive(Debug)]
pub(crate) struct Frame {
    pub(crate) vertex: Vertex,
    neighbors: std::vec::IntoIter<Vertex>,
}

impl Frame {
    pub(crate) fn enter<G: Graph>(graph: &G, vertex: Vertex) -> Self {
        Frame {
            vertex,
            neighbors: graph.neighbors(vertex).collect::<Vec<_>>().into_iter(),
        }
    }

    /// Advances the cursor past visited neighbors, returning the first
    /// unvisited one.
    pub(crate) fn next_unvisited(&mut self, visited: &VisitedSet) -> Option<Vertex> {
        self.neighbors.find(|&neighbor| !visited.contains(neighbor))
    }

    /// Advances the cursor by one neighbor, visited or not.
    pub(crate) fn next_neighbor(&mut self) -> Option<Vertex> {
        self.neighbors.next()
    }
}

/// Depth-first pre-order iterator.  Yields the same order as the classic
/// recursive walk (mark and emit on entry, then recurse into each unvisited
/// neighbor in listing order) using a heap-allocated stack of [`Frame`]s.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct DfsPreorder<'g, G: Graph> {
    #[derivative(Debug = "ignore")]
    graph: &'g G,
    visited: VisitedSet,
    stack: Vec<Frame>,
    pending: Option<Vertex>,
}

impl<'g, G> DfsPreorder<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: Vertex) -> Self {
        Self::with_visited(graph, start, VisitedSet::new(graph.num_vertices()))
    }

    /// Yields nothing if `start` is already in `visited` or out of range.
    pub fn with_visited(graph: &'g G, start: Vertex, mut visited: VisitedSet) -> Self {
        let mut stack = Vec::new();
        let mut pending = None;
        if graph.contains_vertex(start) && visited.insert(start) {
            stack.push(Frame::enter(graph, start));
            pending = Some(start);
        }
        Self {
            graph,
            visited,
            stack,
            pending,
        }
    }

    pub fn into_visited(self) -> VisitedSet {
        self.visited
    }
}

impl<'g, G> Iterator for DfsPreorder<'g, G>
where
    G: Graph,
{
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending.take() {
            return Some(start);
        }
        while let Some(frame) = self.stack.last_mut() {
            match frame.next_unvisited(&self.visited) {
                Some(neighbor) => {
                    self.visited.insert(neighbor);
                    self.stack.push(Frame::enter(self.graph, neighbor));
                    return Some(neighbor);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Depth-first post-order iterator: a vertex is yielded once every
/// neighbor reachable through it has been yielded.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct DfsPostorder<'g, G: Graph> {
    #[derivative(Debug = "ignore")]
    graph: &'g G,
    visited: VisitedSet,
    stack: Vec<Frame>,
}

impl<'g, G> DfsPostorder<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: Vertex) -> Self {
        Self::with_visited(graph, start, VisitedSet::new(graph.num_vertices()))
    }

    pub fn with_visited(graph: &'g G, start: Vertex, mut visited: VisitedSet) -> Self {
        let mut stack = Vec::new();
        if graph.contains_vertex(start) && visited.insert(start) {
            stack.push(Frame::enter(graph, start));
        }
        Self {
            graph,
            visited,
            stack,
        }
    }

    pub fn into_visited(self) -> VisitedSet {
        self.visited
    }
}

impl<'g, G> Iterator for DfsPostorder<'g, G>
where
    G: Graph,
{
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.last_mut() {
            match frame.next_unvisited(&self.visited) {
                Some(neighbor) => {
                    self.visited.insert(neighbor);
                    self.stack.push(Frame::enter(self.graph, neighbor));
                }
                None => return self.stack.pop().map(|frame| frame.vertex),
            }
        }
        None
    }
}
