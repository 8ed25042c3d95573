#[cfg(test)]
#[path = "../../tests/unit/search/dijkstra_test.rs"]
mod dijkstra_test;

use super::{reconstruct_path, QueueItem};
use crate::algorithms::geo::node_distance;
use crate::models::{NodeId, RoadNetwork};
use crate::utils::{Float, RouteError, RouteResult};
use rustc_hash::FxHashMap;
use std::collections::BinaryHeap;

/// Finds the shortest path by total geodesic length using classical Dijkstra's algorithm.
/// Equal cost alternatives are resolved in favor of nodes with lower ids.
pub fn shortest_path<G: RoadNetwork + ?Sized>(graph: &G, source: NodeId, target: NodeId) -> RouteResult<Vec<NodeId>> {
    if !graph.contains(source) || !graph.contains(target) {
        return Err(RouteError::Unreachable { from: source, to: target });
    }

    let mut distances: FxHashMap<NodeId, Float> = FxHashMap::default();
    let mut predecessors: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut heap = BinaryHeap::new();

    distances.insert(source, 0.);
    heap.push(QueueItem { cost: 0., node: source });

    while let Some(QueueItem { cost, node: current }) = heap.pop() {
        if current == target {
            return Ok(reconstruct_path(&predecessors, source, target));
        }

        // stale entry
        if cost > distances.get(&current).copied().unwrap_or(Float::INFINITY) {
            continue;
        }

        for neighbor in graph.neighbors(current) {
            let tentative = cost + node_distance(graph, current, neighbor)?;

            if tentative < distances.get(&neighbor).copied().unwrap_or(Float::INFINITY) {
                distances.insert(neighbor, tentative);
                predecessors.insert(neighbor, current);
                heap.push(QueueItem { cost: tentative, node: neighbor });
            }
        }
    }

    Err(RouteError::Unreachable { from: source, to: target })
}
