use super::*;
use crate::helpers::models::{create_blocked, create_cycle_graph};

#[test]
fn can_hide_blocked_nodes_as_vertices() {
    let graph = create_cycle_graph(5);
    let blocked = create_blocked(&[0, 3]);
    let pruned = PrunedGraph::new(&graph, &blocked);

    assert!(!pruned.contains(0));
    assert!(pruned.contains(1));
    assert_eq!(pruned.nodes().collect::<Vec<_>>(), vec![1, 2, 4]);
    assert_eq!(pruned.neighbors(1).collect::<Vec<_>>(), vec![2]);
    assert_eq!(pruned.neighbors(4).count(), 0);
    assert_eq!(pruned.neighbors(0).count(), 0);
}

#[test]
fn can_drop_edges_touching_blocked_nodes() {
    let graph = create_cycle_graph(5);
    let blocked = create_blocked(&[0]);
    let pruned = PrunedGraph::new(&graph, &blocked);

    let edges = pruned.edges().collect::<Vec<_>>();

    assert_eq!(edges, vec![EdgeKey::new(1, 2), EdgeKey::new(2, 3), EdgeKey::new(3, 4)]);
    assert!(edges.iter().all(|edge| !edge.touches(0)));
}

#[test]
fn can_hide_attributes_of_blocked_nodes() {
    let graph = create_cycle_graph(5);
    let blocked = create_blocked(&[2]);
    let pruned = PrunedGraph::new(&graph, &blocked);

    assert_eq!(pruned.coordinate(2), None);
    assert_eq!(pruned.risk(2), None);
    assert_eq!(pruned.congestion(1, 2), None);
    assert_eq!(pruned.congestion(0, 1), Some(1));
    assert_eq!(pruned.risk(1), Some(0.));
}
