use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use quickcheck::Arbitrary;

use crate::{
    directedness::Directedness,
    graph::{Graph, GraphMut},
    tracing_support::init_tracing,
};

/// A random graph of up to 19 vertices with weights between 1 and 9, so that
/// both stores represent the same edges.
#[derive(Debug, Clone)]
pub struct ArbGraph<G> {
    pub graph: G,
}

impl<G> Arbitrary for ArbGraph<G>
where
    G: GraphMut + Clone + Debug + 'static,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let num_extra_parallel_edges = usize::arbitrary(g) % 5;
        let num_extra_self_loops = usize::arbitrary(g) % 5;

        let mut graph = G::new(num_vertices, Directedness::arbitrary(g));
        for i in 0..num_edges {
            if num_vertices < 2 {
                break;
            }
            let from = usize::arbitrary(g) % num_vertices;
            let into = usize::arbitrary(g) % num_vertices;
            graph.add_edge(from, into, arbitrary_weight(g));
            if i < num_extra_parallel_edges {
                graph.add_edge(from, into, arbitrary_weight(g));
            }
            if i < num_extra_self_loops {
                graph.add_edge(from, from, arbitrary_weight(g));
            }
        }

        ArbGraph { graph }
    }
}

/// A random directed acyclic graph: every edge goes from a lower index to a
/// higher one.
#[derive(Debug, Clone)]
pub struct ArbDag<G> {
    pub graph: G,
}

impl<G> Arbitrary for ArbDag<G>
where
    G: GraphMut + Clone + Debug + 'static,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20;
        let num_edges = usize::arbitrary(g) % 50;

        let mut graph = G::directed(num_vertices);
        for _ in 0..num_edges {
            if num_vertices < 2 {
                break;
            }
            let a = usize::arbitrary(g) % num_vertices;
            let b = usize::arbitrary(g) % num_vertices;
            if a != b {
                graph.add_edge(a.min(b), a.max(b), arbitrary_weight(g));
            }
        }

        ArbDag { graph }
    }
}

fn arbitrary_weight(g: &mut quickcheck::Gen) -> i64 {
    (u8::arbitrary(g) % 9 + 1).into()
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks the internal consistency of a graph.
pub fn check_graph_consistency<G: Graph>(graph: &G) {
    init_tracing();

    for vertex in graph.vertices() {
        assert_eq!(graph.check_vertex(vertex), Ok(()));
        assert_eq!(graph.degree(vertex), graph.neighbors(vertex).count());
        assert!(
            graph
                .neighbors(vertex)
                .eq(graph.edges_with_weights(vertex).map(|(n, _)| n))
        );

        for (neighbor, weight) in graph.edges_with_weights(vertex) {
            assert!(graph.contains_vertex(neighbor));
            assert!(graph.has_edge(vertex, neighbor));
            if !graph.is_directed() {
                assert!(graph.has_edge(neighbor, vertex));
                assert!(
                    graph
                        .edges_with_weights(neighbor)
                        .any(|(n, w)| n == vertex && w == weight)
                );
            }
        }
    }

    let n = graph.num_vertices();
    assert!(graph.check_vertex(n).is_err());
    assert_eq!(graph.neighbors(n).count(), 0);

    // Every listed entry belongs to exactly one edge, except that an
    // undirected non-loop edge is listed under both ends.
    let entries: usize = graph.vertices().map(|v| graph.degree(v)).sum();
    if graph.is_directed() {
        assert_eq!(entries, graph.num_edges());
    } else {
        let loops: usize = graph
            .vertices()
            .map(|v| graph.neighbors(v).filter(|&n| n == v).count())
            .sum();
        assert_eq!(entries + loops, 2 * graph.num_edges());
    }
}
