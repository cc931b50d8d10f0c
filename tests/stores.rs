//! Backing-store tests: adjacency list and adjacency matrix in isolation.

use dualgraph::store::{AdjacencyList, AdjacencyMatrix};
use dualgraph::types::{GraphError, NodeId};

fn id(raw: u64) -> NodeId {
    NodeId::new(raw)
}

// ==================== Adjacency List Tests ====================

#[test]
fn test_list_add_node() {
    let mut list = AdjacencyList::new();
    list.add_node(id(0)).unwrap();
    assert!(list.contains(id(0)));
    assert_eq!(list.node_count(), 1);
    assert_eq!(list.neighbors(id(0)).unwrap().len(), 0);
}

#[test]
fn test_list_nodes_snapshot() {
    let mut list = AdjacencyList::new();
    assert!(list.is_empty());
    for i in 0..3 {
        list.add_node(id(i)).unwrap();
    }
    assert!(!list.is_empty());
    let mut nodes = list.nodes();
    nodes.sort_unstable();
    assert_eq!(nodes, vec![id(0), id(1), id(2)]);
}

#[test]
fn test_list_duplicate_node_rejected() {
    let mut list = AdjacencyList::new();
    list.add_node(id(0)).unwrap();
    let result = list.add_node(id(0));
    match result.unwrap_err() {
        GraphError::NodeAlreadyExists(n) => assert_eq!(n, id(0)),
        e => panic!("Expected NodeAlreadyExists, got {:?}", e),
    }
    assert_eq!(list.node_count(), 1);
}

#[test]
fn test_list_add_edge_missing_endpoint() {
    let mut list = AdjacencyList::new();
    list.add_node(id(0)).unwrap();
    assert!(list.add_edge(id(0), id(1), 1.0).is_err());
    assert!(list.add_edge(id(1), id(0), 1.0).is_err());
    assert_eq!(list.edge_count(), 0);
}

#[test]
fn test_list_parallel_edges_allowed() {
    // Multiplicity policy lives in the facade; the list itself appends
    // unconditionally.
    let mut list = AdjacencyList::new();
    list.add_node(id(0)).unwrap();
    list.add_node(id(1)).unwrap();
    list.add_edge(id(0), id(1), 1.0).unwrap();
    list.add_edge(id(0), id(1), 2.0).unwrap();
    list.add_edge(id(0), id(1), 1.0).unwrap();

    let seq = list.neighbors(id(0)).unwrap();
    assert_eq!(seq.len(), 3);
    // Insertion order is preserved
    assert_eq!(seq[0].weight, 1.0);
    assert_eq!(seq[1].weight, 2.0);
    assert_eq!(seq[2].weight, 1.0);
}

#[test]
fn test_list_remove_edge_first_match() {
    let mut list = AdjacencyList::new();
    list.add_node(id(0)).unwrap();
    list.add_node(id(1)).unwrap();
    list.add_edge(id(0), id(1), 1.0).unwrap();
    list.add_edge(id(0), id(1), 2.0).unwrap();

    list.remove_edge(id(0), id(1)).unwrap();
    let seq = list.neighbors(id(0)).unwrap();
    assert_eq!(seq.len(), 1);
    assert_eq!(seq[0].weight, 2.0);
}

#[test]
fn test_list_remove_edge_exact() {
    let mut list = AdjacencyList::new();
    list.add_node(id(0)).unwrap();
    list.add_node(id(1)).unwrap();
    list.add_edge(id(0), id(1), 1.0).unwrap();
    list.add_edge(id(0), id(1), 2.5).unwrap();

    list.remove_edge_exact(id(0), id(1), 2.5).unwrap();
    let seq = list.neighbors(id(0)).unwrap();
    assert_eq!(seq.len(), 1);
    assert_eq!(seq[0].weight, 1.0);

    let result = list.remove_edge_exact(id(0), id(1), 2.5);
    match result.unwrap_err() {
        GraphError::EdgeNotFound { .. } => {}
        e => panic!("Expected EdgeNotFound, got {:?}", e),
    }
}

#[test]
fn test_list_remove_missing_edge() {
    let mut list = AdjacencyList::new();
    list.add_node(id(0)).unwrap();
    list.add_node(id(1)).unwrap();
    let result = list.remove_edge(id(0), id(1));
    match result.unwrap_err() {
        GraphError::EdgeNotFound { source, target } => {
            assert_eq!(source, id(0));
            assert_eq!(target, id(1));
        }
        e => panic!("Expected EdgeNotFound, got {:?}", e),
    }
}

#[test]
fn test_list_edge_exists_absent_endpoints() {
    // Unknown endpoints yield a clean false, never a panic or error.
    let mut list = AdjacencyList::new();
    list.add_node(id(0)).unwrap();
    assert!(!list.edge_exists(id(0), id(9)));
    assert!(!list.edge_exists(id(9), id(0)));
    assert!(!list.edge_exists(id(8), id(9)));
    assert!(!list.edge_exists(id(0), id(0)));
}

#[test]
fn test_list_remove_node_strips_all_references() {
    let mut list = AdjacencyList::new();
    for i in 0..4 {
        list.add_node(id(i)).unwrap();
    }
    // Several nodes point at 2, including a parallel pair from 0.
    list.add_edge(id(0), id(2), 1.0).unwrap();
    list.add_edge(id(0), id(2), 1.0).unwrap();
    list.add_edge(id(1), id(2), 1.0).unwrap();
    list.add_edge(id(3), id(1), 1.0).unwrap();

    let removed = list.remove_node(id(2)).unwrap();
    assert_eq!(removed, id(2));
    assert!(!list.contains(id(2)));
    for i in [0u64, 1, 3] {
        for e in list.neighbors(id(i)).unwrap() {
            assert_ne!(e.target, id(2));
        }
    }
    // Unrelated edges survive
    assert!(list.edge_exists(id(3), id(1)));
}

#[test]
fn test_list_remove_missing_node() {
    let mut list = AdjacencyList::new();
    match list.remove_node(id(7)).unwrap_err() {
        GraphError::NodeNotFound(n) => assert_eq!(n, id(7)),
        e => panic!("Expected NodeNotFound, got {:?}", e),
    }
}

#[test]
fn test_list_neighbors_missing_node() {
    let list = AdjacencyList::new();
    assert!(list.neighbors(id(0)).is_err());
}

// ==================== Adjacency Matrix Tests ====================

#[test]
fn test_matrix_add_node_assigns_dense_indices() {
    let mut matrix = AdjacencyMatrix::new();
    for i in 0..5 {
        matrix.add_node(id(i)).unwrap();
        assert_eq!(matrix.index_of(id(i)), Some(i as usize));
    }
    assert_eq!(matrix.node_count(), 5);
    assert_eq!(matrix.nodes(), &[id(0), id(1), id(2), id(3), id(4)]);
}

#[test]
fn test_matrix_duplicate_node_rejected() {
    let mut matrix = AdjacencyMatrix::new();
    matrix.add_node(id(0)).unwrap();
    match matrix.add_node(id(0)).unwrap_err() {
        GraphError::NodeAlreadyExists(n) => assert_eq!(n, id(0)),
        e => panic!("Expected NodeAlreadyExists, got {:?}", e),
    }
}

#[test]
fn test_matrix_capacity_doubles() {
    let mut matrix = AdjacencyMatrix::new();
    assert_eq!(matrix.capacity(), 1);
    matrix.add_node(id(0)).unwrap();
    assert_eq!(matrix.capacity(), 2);
    matrix.add_node(id(1)).unwrap();
    assert_eq!(matrix.capacity(), 4);
    matrix.add_node(id(2)).unwrap();
    matrix.add_node(id(3)).unwrap();
    assert_eq!(matrix.capacity(), 8);
}

#[test]
fn test_matrix_edge_counts_survive_growth() {
    let mut matrix = AdjacencyMatrix::new();
    matrix.add_node(id(0)).unwrap();
    matrix.add_node(id(1)).unwrap();
    matrix.add_edge(id(0), id(1)).unwrap();
    matrix.add_edge(id(0), id(1)).unwrap();
    matrix.add_edge(id(1), id(0)).unwrap();

    // Push through several doublings
    for i in 2..20 {
        matrix.add_node(id(i)).unwrap();
    }

    assert_eq!(matrix.edge_count(id(0), id(1)), Some(2));
    assert_eq!(matrix.edge_count(id(1), id(0)), Some(1));
    assert_eq!(matrix.edge_count(id(0), id(19)), Some(0));
    // Indices were stable: growth never renumbers
    assert_eq!(matrix.index_of(id(0)), Some(0));
    assert_eq!(matrix.index_of(id(19)), Some(19));
}

#[test]
fn test_matrix_edge_count_sentinel() {
    let mut matrix = AdjacencyMatrix::new();
    matrix.add_node(id(0)).unwrap();
    // None is the reserved unknown-endpoint signal; Some(0) means no edge.
    assert_eq!(matrix.edge_count(id(0), id(0)), Some(0));
    assert_eq!(matrix.edge_count(id(0), id(9)), None);
    assert_eq!(matrix.edge_count(id(9), id(0)), None);
}

#[test]
fn test_matrix_remove_edge_at_zero_fails() {
    let mut matrix = AdjacencyMatrix::new();
    matrix.add_node(id(0)).unwrap();
    matrix.add_node(id(1)).unwrap();
    match matrix.remove_edge(id(0), id(1)).unwrap_err() {
        GraphError::EdgeNotFound { .. } => {}
        e => panic!("Expected EdgeNotFound, got {:?}", e),
    }

    matrix.add_edge(id(0), id(1)).unwrap();
    matrix.remove_edge(id(0), id(1)).unwrap();
    assert_eq!(matrix.edge_count(id(0), id(1)), Some(0));
    assert!(matrix.remove_edge(id(0), id(1)).is_err());
}

#[test]
fn test_matrix_remove_node_renumbers() {
    let mut matrix = AdjacencyMatrix::new();
    for i in 0..4 {
        matrix.add_node(id(i)).unwrap();
    }
    matrix.add_edge(id(0), id(3)).unwrap();
    matrix.add_edge(id(3), id(0)).unwrap();
    matrix.add_edge(id(2), id(3)).unwrap();

    let removed = matrix.remove_node(id(1)).unwrap();
    assert_eq!(removed, id(1));
    assert_eq!(matrix.node_count(), 3);

    // Higher indices shifted down by one; lower ones untouched
    assert_eq!(matrix.index_of(id(0)), Some(0));
    assert_eq!(matrix.index_of(id(2)), Some(1));
    assert_eq!(matrix.index_of(id(3)), Some(2));
    assert_eq!(matrix.nodes(), &[id(0), id(2), id(3)]);

    // Surviving cells kept their counts
    assert_eq!(matrix.edge_count(id(0), id(3)), Some(1));
    assert_eq!(matrix.edge_count(id(3), id(0)), Some(1));
    assert_eq!(matrix.edge_count(id(2), id(3)), Some(1));
    assert_eq!(matrix.edge_count(id(1), id(0)), None);
}

#[test]
fn test_matrix_capacity_never_shrinks() {
    let mut matrix = AdjacencyMatrix::new();
    for i in 0..10 {
        matrix.add_node(id(i)).unwrap();
    }
    let cap = matrix.capacity();
    for i in 0..10 {
        matrix.remove_node(id(i)).unwrap();
    }
    assert_eq!(matrix.node_count(), 0);
    assert_eq!(matrix.capacity(), cap);
}

#[test]
fn test_matrix_render_empty() {
    let matrix = AdjacencyMatrix::new();
    assert_eq!(matrix.render(|n| n.to_string()), "empty");
}

#[test]
fn test_matrix_render_contains_labels_and_counts() {
    let mut matrix = AdjacencyMatrix::new();
    matrix.add_node(id(0)).unwrap();
    matrix.add_node(id(1)).unwrap();
    matrix.add_edge(id(0), id(1)).unwrap();
    matrix.add_edge(id(0), id(1)).unwrap();

    let out = matrix.render(|n| format!("n{}", n.as_u64()));
    assert!(out.contains("n0"));
    assert!(out.contains("n1"));
    assert!(out.contains('2'));
    assert!(out.contains('|'));
}

// ==================== Cross-Store Tests ====================

#[test]
fn test_duplicate_id_fails_in_both_stores() {
    // The same handle must be rejected on re-insertion by each store.
    let mut list = AdjacencyList::new();
    let mut matrix = AdjacencyMatrix::new();
    list.add_node(id(5)).unwrap();
    matrix.add_node(id(5)).unwrap();
    assert!(list.add_node(id(5)).is_err());
    assert!(matrix.add_node(id(5)).is_err());
}
