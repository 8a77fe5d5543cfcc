mod matrix {
    pub use graphlab::{AdjacencyMatrix, graph_tests, prelude::*};

    graph_tests!(adjacency_matrix, AdjacencyMatrix);

    #[test]
    fn test_zero_weight_removes_edge() {
        let mut graph = AdjacencyMatrix::undirected(3);
        graph.add_edge(0, 1, 4);
        graph.add_edge(1, 0, 0);
        assert!(!graph.has_edge(0, 1));
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_parallel_edge_overwrites() {
        let mut graph = AdjacencyMatrix::directed(2);
        graph.add_edge(0, 1, 4);
        graph.add_edge(0, 1, 7);
        assert_eq!(graph.edges_with_weights(0).collect::<Vec<_>>(), vec![(1, 7)]);
    }
}

mod list {
    pub use graphlab::{AdjacencyList, graph_tests, prelude::*};

    graph_tests!(adjacency_list, AdjacencyList);

    #[test]
    fn test_zero_weight_is_kept() {
        let mut graph = AdjacencyList::undirected(3);
        graph.add_edge(0, 1, 0);
        assert_eq!(graph.edge_weight(1, 0), Some(0));
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_parallel_edges_are_kept_in_insertion_order() {
        let mut graph = AdjacencyList::directed(3);
        graph.add_edge(0, 2, 4);
        graph.add_edge(0, 1, 1);
        graph.add_edge(0, 2, 7);
        assert_eq!(
            graph.edges_with_weights(0).collect::<Vec<_>>(),
            vec![(2, 4), (1, 1), (2, 7)]
        );
        assert_eq!(graph.edge_weight(0, 2), Some(4));
        graph.remove_edge(0, 2);
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1]);
    }
}
