use crate::models::{BlockedSet, Edge, Node, NodeId, RoadGraph};
use crate::utils::Float;
use std::f64::consts::PI;

/// Roughly 111 meters at the equator.
pub const DEFAULT_STEP: Float = 0.001;

pub fn create_graph(nodes: &[(NodeId, Float, Float)], edges: &[(NodeId, NodeId)]) -> RoadGraph {
    let mut graph = RoadGraph::default();

    nodes.iter().for_each(|&(id, lat, lon)| {
        graph.add_node(Node::new(id, lat, lon).with_risk(0.));
    });

    edges.iter().for_each(|&(from, to)| {
        graph.add_edge(from, to, Edge::with_congestion(1)).expect("cannot add edge");
    });

    graph
}

/// Creates a graph with nodes `0..size` placed on a line along the equator.
pub fn create_line_graph(size: usize) -> RoadGraph {
    let nodes = (0..size).map(|idx| (idx as NodeId, 0., idx as Float * DEFAULT_STEP)).collect::<Vec<_>>();
    let edges = (1..size).map(|idx| (idx as NodeId - 1, idx as NodeId)).collect::<Vec<_>>();

    create_graph(nodes.as_slice(), edges.as_slice())
}

/// Creates a cycle with nodes `0..size` placed evenly on a circle, so all edges have the same length.
pub fn create_cycle_graph(size: usize) -> RoadGraph {
    let radius = DEFAULT_STEP;
    let nodes = (0..size)
        .map(|idx| {
            let angle = 2. * PI * idx as Float / size as Float;
            (idx as NodeId, radius * angle.sin(), radius * angle.cos())
        })
        .collect::<Vec<_>>();
    let edges = (0..size).map(|idx| (idx as NodeId, ((idx + 1) % size) as NodeId)).collect::<Vec<_>>();

    create_graph(nodes.as_slice(), edges.as_slice())
}

/// Creates a graph with two disjoint routes from 0 to 3: a short one via 1 and a long one via 2.
pub fn create_two_routes_graph() -> RoadGraph {
    create_graph(
        &[(0, 0., 0.), (1, 0.0005, 0.002), (2, 0.003, 0.002), (3, 0., 0.004)],
        &[(0, 1), (1, 3), (0, 2), (2, 3)],
    )
}

/// Creates a square grid of `size * size` nodes, node id is `row * size + column`.
pub fn create_grid_graph(size: usize) -> RoadGraph {
    let id = |row: usize, column: usize| (row * size + column) as NodeId;

    let nodes = (0..size)
        .flat_map(|row| (0..size).map(move |column| (row, column)))
        .map(|(row, column)| (id(row, column), row as Float * DEFAULT_STEP, column as Float * DEFAULT_STEP))
        .collect::<Vec<_>>();

    let edges = (0..size)
        .flat_map(|row| (0..size).map(move |column| (row, column)))
        .flat_map(|(row, column)| {
            let right = (column + 1 < size).then(|| (id(row, column), id(row, column + 1)));
            let down = (row + 1 < size).then(|| (id(row, column), id(row + 1, column)));
            right.into_iter().chain(down)
        })
        .collect::<Vec<_>>();

    create_graph(nodes.as_slice(), edges.as_slice())
}

pub fn create_blocked(nodes: &[NodeId]) -> BlockedSet {
    nodes.iter().copied().collect()
}
